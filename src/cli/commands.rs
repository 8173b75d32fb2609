//! Command execution for the speedtest recorder CLI

use super::args::{Args, Commands, OutputFormat, ParseArgs};
use crate::collector::run_tool;
use crate::config::RecorderConfig;
use crate::constants::COLUMN_COUNT;
use crate::models::{Measurement, StorageRow, StorageValue};
use crate::parser::parse;
use crate::storage::{SqlStatements, column_names, to_storage_values};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Run the selected command
pub async fn run(args: Args, config: RecorderConfig) -> Result<()> {
    match &args.command {
        Commands::Parse(parse_args) => {
            let raw = read_input(parse_args).await?;
            let measured_at = parse_args.measured_at.unwrap_or_else(Utc::now);
            let output = record(&config, measured_at, &raw, parse_args.output.format)?;
            println!("{}", output);
        }
        Commands::Run(output_args) => {
            let tool_run = run_tool(&config)
                .await
                .context("Speedtest measurement failed")?;
            let output = record(
                &config,
                tool_run.measured_at,
                &tool_run.output,
                output_args.format,
            )?;
            println!("{}", output);
        }
        Commands::Schema => {
            let statements = SqlStatements::new(&config.table_name)?;
            println!("{}", statements.schema());
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Resolve configuration from defaults, environment and CLI flags.
///
/// Call after [`setup_logging`] so environment overrides are logged.
pub fn load_configuration(args: &Args) -> Result<RecorderConfig> {
    let mut config = RecorderConfig::from_env();

    if let Some(table) = &args.table {
        config.table_name = table.clone();
    }
    if let Some(tool) = &args.tool {
        config.tool_path = tool.clone();
    }
    config.log_level = args.log_level().to_string();

    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("speedtest_recorder={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

async fn read_input(args: &ParseArgs) -> Result<String> {
    match args.input_file() {
        Some(path) => {
            info!("Reading speedtest output from {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            info!("Reading speedtest output from stdin");
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Parse raw output and render the resulting row
pub fn record(
    config: &RecorderConfig,
    measured_at: DateTime<Utc>,
    raw: &str,
    format: OutputFormat,
) -> Result<String> {
    let measurement = parse(raw);
    let row = to_storage_values(measured_at, &measurement);

    let absent = measurement.absent_fields();
    if absent.is_empty() {
        info!("All fields parsed");
    } else {
        warn!("{} of 5 fields will be stored as NULL", absent.len());
    }

    let output = match format {
        OutputFormat::Human => render_human(&measurement, &row),
        OutputFormat::Json => render_json(&measurement, &row)?,
        OutputFormat::Sql => SqlStatements::new(&config.table_name)?.insert_literal(&row),
    };

    Ok(output)
}

/// JSON output for one measurement, serialized without widening floats
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    columns: [&'static str; COLUMN_COUNT],
    values: &'a StorageRow,
    absent: BTreeMap<&'static str, String>,
}

fn render_json(measurement: &Measurement, row: &StorageRow) -> Result<String> {
    let report = JsonReport {
        columns: column_names(),
        values: row,
        absent: measurement
            .absent_fields()
            .into_iter()
            .map(|(name, reason)| (name, reason.to_string()))
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_human(measurement: &Measurement, row: &StorageRow) -> String {
    let mut reasons = measurement
        .absent_fields()
        .into_iter()
        .map(|(_, reason)| reason);
    let mut lines = vec![format!("{}", "Speedtest measurement".bold())];

    for (name, value) in column_names().iter().zip(row) {
        let rendered = match value {
            StorageValue::Timestamp(ts) => ts.to_rfc3339().normal(),
            StorageValue::Text(text) => text.green(),
            StorageValue::Float(number) => number.to_string().green(),
            StorageValue::Null(_) => match reasons.next() {
                Some(reason) => format!("NULL ({})", reason).yellow(),
                None => "NULL".yellow(),
            },
        };
        lines.push(format!("  {:<20} {}", name, rendered));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::Parser;

    const SAMPLE: &str = concat!(
        "\n",
        "   Speedtest by Ookla\n",
        "\n",
        "     Server: Example Net (id = 1)\n",
        "        ISP: Example\n",
        "    Latency:    12.42 ms   (2.62 ms jitter)\n",
        "   Download: not available\n",
        "     Upload:     9.41 Mbps (data used: 4.7 MB )\n",
        "Packet Loss:     0.0%\n",
    );

    fn measured_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_json() {
        let output = record(
            &RecorderConfig::default(),
            measured_at(),
            SAMPLE,
            OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["values"][0], "2024-05-01T12:00:00Z");
        assert_eq!(json["values"][1], "Example Net (id = 1)");
        assert!(json["values"][3].is_null());
        assert_eq!(json["values"][5], 0.0);
        assert_eq!(json["columns"][3], "download_mbps");
        assert_eq!(json["absent"]["download"], "'not available' is not a number");
    }

    #[test]
    fn test_record_json_keeps_f32_decimals() {
        let output = record(
            &RecorderConfig::default(),
            measured_at(),
            &SAMPLE.replace("Download: not available", "Download:   103.41 Mbps"),
            OutputFormat::Json,
        )
        .unwrap();

        assert!(output.contains("103.41"));
        assert!(!output.contains("103.41000"));

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["values"][2], 12.42);
        assert_eq!(json["values"][3], 103.41);
        assert_eq!(json["values"][4], 9.41);
    }

    #[test]
    fn test_record_sql_uses_configured_table() {
        let config = RecorderConfig {
            table_name: "speed".to_string(),
            ..Default::default()
        };

        let output = record(&config, measured_at(), SAMPLE, OutputFormat::Sql).unwrap();

        assert!(output.starts_with("INSERT INTO speed ("));
        assert!(output.contains("'Example Net (id = 1)', 12.42, NULL, 9.41, 0);"));
    }

    #[test]
    fn test_record_human_lists_every_column() {
        let output = record(
            &RecorderConfig::default(),
            measured_at(),
            "an error occurred",
            OutputFormat::Human,
        )
        .unwrap();

        for column in column_names() {
            assert!(output.contains(column), "missing {column}");
        }
        assert_eq!(output.matches("NULL (line").count(), 5);
    }

    #[test]
    fn test_load_configuration_takes_cli_level_and_table() {
        let args =
            Args::try_parse_from(["speedtest-recorder", "-vv", "schema", "--table", "speed"])
                .unwrap();
        let config = load_configuration(&args).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.table_name, "speed");
        assert_eq!(config.log_level, args.log_level());
    }
}
