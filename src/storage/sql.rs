//! SQL text for the measurement table
//!
//! The database connection lives outside this crate. These statements are
//! what a client executes: the table definition, a parameterised insert
//! taking a [`StorageRow`] in order, and a literal insert for piping into a
//! SQL shell.

use super::columns::{FIELD_COLUMNS, column_names};
use crate::constants::MEASURED_AT_COLUMN;
use crate::error::{RecorderError, Result};
use crate::models::{ColumnType, StorageRow, StorageValue};
use chrono::SecondsFormat;

/// Statements bound to one validated table name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatements {
    table: String,
}

impl SqlStatements {
    /// Create statements for `table`, rejecting non-identifier names
    pub fn new(table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        if !is_valid_identifier(&table) {
            return Err(RecorderError::configuration(format!(
                "invalid table name '{}' (expected letters, digits and underscores)",
                table
            )));
        }
        Ok(Self { table })
    }

    /// Validated table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// `CREATE TABLE IF NOT EXISTS` for the measurement columns
    pub fn create_table(&self) -> String {
        let mut columns = vec![
            "    id UUID DEFAULT gen_random_uuid() PRIMARY KEY".to_string(),
            format!(
                "    {} {} NOT NULL",
                MEASURED_AT_COLUMN,
                ColumnType::Timestamp.sql_type()
            ),
        ];
        columns.extend(
            FIELD_COLUMNS
                .iter()
                .map(|column| format!("    {} {}", column.name, column.column_type.sql_type())),
        );

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
            self.table,
            columns.join(",\n")
        )
    }

    /// Index on `measured_at`
    pub fn create_index(&self) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS {table}_{column}_idx ON {table} ({column});",
            table = self.table,
            column = MEASURED_AT_COLUMN
        )
    }

    /// Table and index definition
    pub fn schema(&self) -> String {
        format!("{}\n{}", self.create_table(), self.create_index())
    }

    /// Insert with `$1..$6` placeholders in storage row order
    pub fn insert(&self) -> String {
        let placeholders: Vec<String> = (1..=column_names().len())
            .map(|n| format!("${}", n))
            .collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table,
            column_names().join(", "),
            placeholders.join(", ")
        )
    }

    /// Insert with the row's values written inline
    pub fn insert_literal(&self, row: &StorageRow) -> String {
        let values: Vec<String> = row.iter().map(sql_literal).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table,
            column_names().join(", "),
            values.join(", ")
        )
    }
}

/// Render one value as a SQL literal
pub fn sql_literal(value: &StorageValue) -> String {
    match value {
        StorageValue::Timestamp(ts) => {
            format!("'{}'", ts.to_rfc3339_opts(SecondsFormat::Micros, true))
        }
        StorageValue::Text(text) => format!("'{}'", text.replace('\'', "''")),
        StorageValue::Float(value) => value.to_string(),
        StorageValue::Null(_) => "NULL".to_string(),
    }
}

/// Plain SQL identifier: `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
