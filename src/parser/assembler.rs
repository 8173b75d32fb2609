//! Measurement assembly from the fixed report layout

use super::field::extract_field;
use super::lines::Lines;
use super::metric::parse_metric;
use crate::constants::{
    BANDWIDTH_UNIT, DOWNLOAD_LINE, FIELD_START, LATENCY_LINE, LATENCY_UNIT, PACKET_LOSS_LINE,
    PERCENT_UNIT, SERVER_LINE, UPLOAD_LINE,
};
use crate::error::FieldError;
use crate::models::{Field, Measurement};
use tracing::{debug, warn};

/// Where one field lives in the report
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub name: &'static str,
    pub line: usize,
    pub start: &'static str,
    pub end: Option<&'static str>,
}

pub const SERVER: FieldLayout = FieldLayout {
    name: "server",
    line: SERVER_LINE,
    start: FIELD_START,
    end: None,
};

pub const LATENCY: FieldLayout = FieldLayout {
    name: "latency",
    line: LATENCY_LINE,
    start: FIELD_START,
    end: Some(LATENCY_UNIT),
};

pub const DOWNLOAD: FieldLayout = FieldLayout {
    name: "download",
    line: DOWNLOAD_LINE,
    start: FIELD_START,
    end: Some(BANDWIDTH_UNIT),
};

pub const UPLOAD: FieldLayout = FieldLayout {
    name: "upload",
    line: UPLOAD_LINE,
    start: FIELD_START,
    end: Some(BANDWIDTH_UNIT),
};

pub const PACKET_LOSS: FieldLayout = FieldLayout {
    name: "packet_loss",
    line: PACKET_LOSS_LINE,
    start: FIELD_START,
    end: Some(PERCENT_UNIT),
};

impl FieldLayout {
    fn extract<'a>(&self, lines: &Lines<'a>) -> Result<&'a str, FieldError> {
        let line = lines.line_at(self.line)?;
        extract_field(line, self.start, self.end)
    }

    /// Extract this field as text
    pub fn text(&self, lines: &Lines<'_>) -> Field<String> {
        let field: Field<String> = self.extract(lines).map(str::to_string).into();
        self.log_outcome(&field);
        field
    }

    /// Extract this field as a number
    pub fn metric(&self, lines: &Lines<'_>) -> Field<f32> {
        let field: Field<f32> = self.extract(lines).and_then(parse_metric).into();
        self.log_outcome(&field);
        field
    }

    fn log_outcome<T: std::fmt::Debug>(&self, field: &Field<T>) {
        match field {
            Field::Present(value) => debug!("Parsed {}: {:?}", self.name, value),
            Field::Absent(reason) => warn!("No {} in tool output: {}", self.name, reason),
        }
    }
}

/// Parse one raw speedtest report.
///
/// Always returns a measurement with five fields. Each field is extracted
/// on its own, so a failure in one never affects another.
pub fn parse(raw: &str) -> Measurement {
    let lines = Lines::split(raw);
    debug!("Parsing speedtest output with {} lines", lines.len());

    Measurement {
        server: SERVER.text(&lines),
        latency: LATENCY.metric(&lines),
        download: DOWNLOAD.metric(&lines),
        upload: UPLOAD.metric(&lines),
        packet_loss: PACKET_LOSS.metric(&lines),
    }
}
