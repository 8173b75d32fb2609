//! Field-to-column table for storage rows
//!
//! Every measurement field has one entry in [`FIELD_COLUMNS`], declared in
//! column order. Row construction walks this table; no field is looked up by
//! name at runtime.

use crate::constants::{
    COLUMN_COUNT, DOWNLOAD_COLUMN, LATENCY_COLUMN, MEASURED_AT_COLUMN, PACKET_LOSS_COLUMN,
    SERVER_COLUMN, UPLOAD_COLUMN,
};
use crate::models::{ColumnType, Field, Measurement, StorageRow, StorageValue};
use chrono::{DateTime, Utc};

/// One destination column fed by a measurement field
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
    /// Value of the field, `None` when the field is absent
    pub value: fn(&Measurement) -> Option<StorageValue>,
}

impl Column {
    /// Storage value for this column, NULL when the field is absent
    pub fn storage_value(&self, measurement: &Measurement) -> StorageValue {
        (self.value)(measurement).unwrap_or(StorageValue::Null(self.column_type))
    }
}

fn float(field: &Field<f32>) -> Option<StorageValue> {
    field.value().copied().map(StorageValue::Float)
}

/// Columns after `measured_at`, in storage order
pub const FIELD_COLUMNS: [Column; COLUMN_COUNT - 1] = [
    Column {
        name: SERVER_COLUMN,
        column_type: ColumnType::Text,
        value: |m| m.server.value().cloned().map(StorageValue::Text),
    },
    Column {
        name: LATENCY_COLUMN,
        column_type: ColumnType::Float,
        value: |m| float(&m.latency),
    },
    Column {
        name: DOWNLOAD_COLUMN,
        column_type: ColumnType::Float,
        value: |m| float(&m.download),
    },
    Column {
        name: UPLOAD_COLUMN,
        column_type: ColumnType::Float,
        value: |m| float(&m.upload),
    },
    Column {
        name: PACKET_LOSS_COLUMN,
        column_type: ColumnType::Float,
        value: |m| float(&m.packet_loss),
    },
];

/// All destination column names, `measured_at` first
pub fn column_names() -> [&'static str; COLUMN_COUNT] {
    let [server, latency, download, upload, packet_loss] = FIELD_COLUMNS.map(|c| c.name);
    [MEASURED_AT_COLUMN, server, latency, download, upload, packet_loss]
}

/// Build the storage row for one measurement.
///
/// The timestamp always comes first. Absent fields become typed NULLs.
pub fn to_storage_values(measured_at: DateTime<Utc>, measurement: &Measurement) -> StorageRow {
    let [server, latency, download, upload, packet_loss] =
        FIELD_COLUMNS.map(|column| column.storage_value(measurement));

    StorageRow::new([
        StorageValue::Timestamp(measured_at),
        server,
        latency,
        download,
        upload,
        packet_loss,
    ])
}
