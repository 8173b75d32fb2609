//! Mapping of measurements onto the destination table
//!
//! - [`columns`] - Static field-to-column table and row construction
//! - [`sql`] - Table definition and insert statements for the row

pub mod columns;
pub mod sql;

#[cfg(test)]
mod tests;

pub use columns::{Column, FIELD_COLUMNS, column_names, to_storage_values};
pub use sql::SqlStatements;
