//! Command-line argument definitions for the speedtest recorder
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_LOG_LEVEL;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the speedtest recorder
///
/// Parses speedtest CLI reports into measurements and renders them as
/// storage rows for a SQL database.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "speedtest-recorder",
    version,
    about = "Parse speedtest results into storage rows with per-field NULLs",
    long_about = "Runs or reads the output of the speedtest CLI, extracts server, latency, \
                  download, upload and packet loss independently, and prints the resulting row \
                  as a summary, JSON or a SQL INSERT statement. Fields that cannot be read \
                  become NULL without affecting the others."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Destination table name
    #[arg(long = "table", value_name = "NAME", global = true)]
    pub table: Option<String>,

    /// Path to the speedtest executable
    #[arg(long = "tool", value_name = "PATH", global = true)]
    pub tool: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse saved speedtest output from a file or stdin
    Parse(ParseArgs),
    /// Run the speedtest tool and parse its output
    Run(OutputArgs),
    /// Print the table definition
    Schema,
    /// Print the effective configuration as JSON
    Config,
}

#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// File holding the tool output ("-" or omitted for stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Measurement time in RFC 3339 format (defaults to now)
    #[arg(long = "measured-at", value_name = "TIMESTAMP")]
    pub measured_at: Option<DateTime<Utc>>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct OutputArgs {
    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Output format options for a parsed measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON row for scripting
    Json,
    /// SQL INSERT statement for piping into a SQL shell
    Sql,
}

impl ParseArgs {
    /// Input file, `None` when reading stdin
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

impl Args {
    /// Log level selected by verbosity flags, `None` to use the configured level
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Effective log level, known before configuration is loaded
    pub fn log_level(&self) -> &'static str {
        self.get_log_level().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
