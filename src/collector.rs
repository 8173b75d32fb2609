//! Invocation of the external measurement tool.
//!
//! Runs the tool once and hands back its raw text together with the time
//! the measurement started. Parsing is left to [`crate::parser`].

use crate::config::RecorderConfig;
use crate::error::{RecorderError, Result};
use chrono::{DateTime, Utc};
use tokio::process::Command;
use tracing::{debug, info};

/// Raw output of one tool run
#[derive(Debug, Clone)]
pub struct ToolRun {
    /// Captured just before the tool was started
    pub measured_at: DateTime<Utc>,
    /// Stdout followed by stderr
    pub output: String,
}

/// Run the configured tool and collect its combined output.
///
/// A non-zero exit status is an error carrying whatever the tool printed.
pub async fn run_tool(config: &RecorderConfig) -> Result<ToolRun> {
    let tool = config.tool_path.display().to_string();
    let measured_at = Utc::now();

    info!("Running {} {}", tool, config.tool_args.join(" "));

    let output = Command::new(&config.tool_path)
        .args(&config.tool_args)
        .output()
        .await
        .map_err(|source| RecorderError::ToolSpawn {
            tool: tool.clone(),
            source,
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(RecorderError::ToolFailed {
            tool,
            status: output.status,
            output: text.trim().to_string(),
        });
    }

    debug!("Tool produced {} bytes of output", text.len());

    Ok(ToolRun {
        measured_at,
        output: text,
    })
}
