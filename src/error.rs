//! Error handling for measurement parsing and recording.
//!
//! Two layers: [`FieldError`] describes why one field of a measurement is
//! absent and never escapes the parser, while [`RecorderError`] covers the
//! fatal failures around it (running the tool, I/O, configuration).

use std::process::ExitStatus;
use thiserror::Error;

/// Reason a single measurement field could not be extracted.
///
/// These are recorded on the field itself and never abort a parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("line {index} missing from tool output")]
    MissingLine { index: usize },

    #[error("delimiter '{token}' not found in line '{line}'")]
    MissingDelimiter { token: String, line: String },

    #[error("'{input}' is not a number")]
    NumericParse { input: String },
}

impl FieldError {
    /// Create a missing line error
    pub fn missing_line(index: usize) -> Self {
        Self::MissingLine { index }
    }

    /// Create a missing delimiter error for `token` in `line`
    pub fn missing_delimiter(token: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MissingDelimiter {
            token: token.into(),
            line: line.into(),
        }
    }

    /// Create a numeric parse error for non-numeric text
    pub fn numeric_parse(input: impl Into<String>) -> Self {
        Self::NumericParse {
            input: input.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to start measurement tool '{tool}': {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Measurement tool '{tool}' exited with {status}: {output}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RecorderError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecorderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::missing_line(8).to_string(),
            "line 8 missing from tool output"
        );
        assert_eq!(
            FieldError::missing_delimiter(":", "garbage").to_string(),
            "delimiter ':' not found in line 'garbage'"
        );
        assert_eq!(
            FieldError::numeric_parse("Not available.").to_string(),
            "'Not available.' is not a number"
        );
    }

    #[test]
    fn test_configuration_error_message() {
        let err = RecorderError::configuration("table name must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: table name must not be empty"
        );
    }
}
