//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! command-line overrides applied by the CLI.

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_TABLE_NAME, DEFAULT_TOOL_ARGS, DEFAULT_TOOL_PATH, ENV_TABLE_NAME,
    ENV_TOOL_PATH,
};
use crate::error::{RecorderError, Result};
use crate::storage::sql::is_valid_identifier;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Measurement tool executable
    pub tool_path: PathBuf,

    /// Arguments passed to the tool
    pub tool_args: Vec<String>,

    /// Destination table for inserts and schema output
    pub table_name: String,

    pub log_level: String,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            tool_path: PathBuf::from(DEFAULT_TOOL_PATH),
            tool_args: DEFAULT_TOOL_ARGS.iter().map(|s| s.to_string()).collect(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RecorderConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tool) = lookup(ENV_TOOL_PATH) {
            debug!("Tool path from {}: {}", ENV_TOOL_PATH, tool);
            self.tool_path = PathBuf::from(tool);
        }
        if let Some(table) = lookup(ENV_TABLE_NAME) {
            debug!("Table name from {}: {}", ENV_TABLE_NAME, table);
            self.table_name = table;
        }
        self
    }

    /// Validate tool path and table name
    pub fn validate(&self) -> Result<()> {
        if self.tool_path.as_os_str().is_empty() {
            return Err(RecorderError::configuration("tool path must not be empty"));
        }

        if !is_valid_identifier(&self.table_name) {
            return Err(RecorderError::configuration(format!(
                "invalid table name '{}' (expected letters, digits and underscores)",
                self.table_name
            )));
        }

        Ok(())
    }
}
