//! Speedtest Recorder Library
//!
//! Parses the plain-text report of the speedtest CLI into a typed
//! [`Measurement`] and maps it onto a fixed six-column storage row.
//!
//! This library provides tools for:
//! - Positional extraction of server, latency, download, upload and packet loss
//! - Per-field failure tracking, so one unreadable metric never hides the others
//! - A static field-to-column table producing rows with typed NULLs
//! - SQL text for the destination table and inserts
//! - Running the external tool and capturing its output
//!
//! ```rust
//! use chrono::Utc;
//! use speedtest_recorder::{parse, to_storage_values};
//!
//! let measurement = parse("an error occurred");
//! let row = to_storage_values(Utc::now(), &measurement);
//! assert_eq!(row.len(), 6);
//! assert!(row.iter().skip(1).all(|value| value.is_null()));
//! ```

pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::RecorderConfig;
pub use error::{FieldError, RecorderError, Result};
pub use models::{ColumnType, Field, Measurement, StorageRow, StorageValue};
pub use parser::parse;
pub use storage::to_storage_values;
