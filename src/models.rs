//! Core data structures for parsed measurements and storage rows.
//!
//! A [`Measurement`] holds five independently present-or-absent fields. A
//! [`StorageRow`] is the fixed-width value list handed to the database layer.

use crate::constants::COLUMN_COUNT;
use crate::error::FieldError;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::ops::Index;

/// One extracted field: either a parsed value or the reason it is missing.
///
/// Equality compares values only. Two absent fields are equal whatever
/// their reasons, which are diagnostic.
#[derive(Debug, Clone)]
pub enum Field<T> {
    Present(T),
    Absent(FieldError),
}

impl<T> Field<T> {
    /// Parsed value, `None` when absent
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent(_) => None,
        }
    }

    /// Why the field is absent, `None` when present
    pub fn reason(&self) -> Option<&FieldError> {
        match self {
            Field::Present(_) => None,
            Field::Absent(reason) => Some(reason),
        }
    }

    /// Check if the field carries a value
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Check if the field failed to parse
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }
}

impl<T> From<Result<T, FieldError>> for Field<T> {
    fn from(result: Result<T, FieldError>) -> Self {
        match result {
            Ok(value) => Field::Present(value),
            Err(reason) => Field::Absent(reason),
        }
    }
}

impl<T: PartialEq> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Field::Present(a), Field::Present(b)) => a == b,
            (Field::Absent(_), Field::Absent(_)) => true,
            _ => false,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::Absent(_) => serializer.serialize_none(),
        }
    }
}

/// Result of parsing one speedtest report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub server: Field<String>,
    /// Milliseconds
    pub latency: Field<f32>,
    /// Megabits per second
    pub download: Field<f32>,
    /// Megabits per second
    pub upload: Field<f32>,
    /// Percent
    pub packet_loss: Field<f32>,
}

impl Measurement {
    /// Absent fields with their reasons, in column order
    pub fn absent_fields(&self) -> Vec<(&'static str, &FieldError)> {
        let reasons = [
            ("server", self.server.reason()),
            ("latency", self.latency.reason()),
            ("download", self.download.reason()),
            ("upload", self.upload.reason()),
            ("packet_loss", self.packet_loss.reason()),
        ];

        reasons
            .into_iter()
            .filter_map(|(name, reason)| reason.map(|r| (name, r)))
            .collect()
    }

    /// Check if all five fields were parsed
    pub fn is_complete(&self) -> bool {
        self.absent_fields().is_empty()
    }
}

/// Declared storage type of a destination column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Timestamp,
    Text,
    Float,
}

impl ColumnType {
    /// SQL type used in the table definition
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Timestamp => "TIMESTAMP WITH TIME ZONE",
            ColumnType::Text => "TEXT",
            ColumnType::Float => "REAL",
        }
    }
}

/// A single storage-ready value
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Timestamp(DateTime<Utc>),
    Text(String),
    Float(f32),
    /// SQL NULL for a column of the given type
    Null(ColumnType),
}

impl StorageValue {
    /// Check if this value is a SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null(_))
    }

    /// Declared column type, also for NULLs
    pub fn column_type(&self) -> ColumnType {
        match self {
            StorageValue::Timestamp(_) => ColumnType::Timestamp,
            StorageValue::Text(_) => ColumnType::Text,
            StorageValue::Float(_) => ColumnType::Float,
            StorageValue::Null(column_type) => *column_type,
        }
    }
}

impl Serialize for StorageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StorageValue::Timestamp(ts) => ts.serialize(serializer),
            StorageValue::Text(text) => serializer.serialize_str(text),
            StorageValue::Float(value) => serializer.serialize_f32(*value),
            StorageValue::Null(_) => serializer.serialize_none(),
        }
    }
}

/// Ordered storage values for one measurement:
/// `[measured_at, server, latency, download, upload, packet_loss]`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StorageRow([StorageValue; COLUMN_COUNT]);

impl StorageRow {
    /// Create a row from values in column order
    pub fn new(values: [StorageValue; COLUMN_COUNT]) -> Self {
        Self(values)
    }

    /// Values in column order
    pub fn values(&self) -> &[StorageValue] {
        &self.0
    }

    /// Number of entries, always the column count
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Rows are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate values in column order
    pub fn iter(&self) -> std::slice::Iter<'_, StorageValue> {
        self.0.iter()
    }

    /// Consume the row into its values
    pub fn into_values(self) -> [StorageValue; COLUMN_COUNT] {
        self.0
    }
}

impl Index<usize> for StorageRow {
    type Output = StorageValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a StorageRow {
    type Item = &'a StorageValue;
    type IntoIter = std::slice::Iter<'a, StorageValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
