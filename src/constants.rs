//! Layout and storage constants for speedtest output.
//!
//! The tool prints a fixed ten-line report. Fields are located by line index
//! and delimiter tokens, never by label:
//!
//! ```text
//!  0:
//!  1: Speedtest by Ookla
//!  2:
//!  3:      Server: TWL-KOM - Ludwigshafen (id = 10291)
//!  4:         ISP: Vodafone Germany Cable
//!  5:     Latency:    12.42 ms   (2.62 ms jitter)
//!  6:    Download:   103.41 Mbps (data used: 99.3 MB )
//!  7:      Upload:     9.41 Mbps (data used: 4.7 MB )
//!  8: Packet Loss:     0.0%
//!  9:  Result URL: https://www.speedtest.net/result/c/...
//! ```

// =============================================================================
// Line Layout
// =============================================================================

/// Start delimiter shared by every field
pub const FIELD_START: &str = ":";

pub const SERVER_LINE: usize = 3;
pub const LATENCY_LINE: usize = 5;
pub const DOWNLOAD_LINE: usize = 6;
pub const UPLOAD_LINE: usize = 7;
pub const PACKET_LOSS_LINE: usize = 8;

pub const LATENCY_UNIT: &str = "ms";
pub const BANDWIDTH_UNIT: &str = "Mbps";
pub const PERCENT_UNIT: &str = "%";

// =============================================================================
// Storage Columns
// =============================================================================

/// Number of entries in a storage row (timestamp plus five fields)
pub const COLUMN_COUNT: usize = 6;

pub const MEASURED_AT_COLUMN: &str = "measured_at";
pub const SERVER_COLUMN: &str = "server";
pub const LATENCY_COLUMN: &str = "latency_ms";
pub const DOWNLOAD_COLUMN: &str = "download_mbps";
pub const UPLOAD_COLUMN: &str = "upload_mbps";
pub const PACKET_LOSS_COLUMN: &str = "packet_loss_percent";

pub const DEFAULT_TABLE_NAME: &str = "measurement";

// =============================================================================
// Measurement Tool
// =============================================================================

pub const DEFAULT_TOOL_PATH: &str = "/usr/local/bin/speedtest";

/// Disable the progress bar so the output keeps its fixed layout
pub const DEFAULT_TOOL_ARGS: &[&str] = &["-p", "no"];

pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Environment overrides
pub const ENV_TOOL_PATH: &str = "SPEEDTEST_RECORDER_TOOL";
pub const ENV_TABLE_NAME: &str = "SPEEDTEST_RECORDER_TABLE";
