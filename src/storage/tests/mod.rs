//! Test fixtures for storage mapping

use crate::error::FieldError;
use crate::models::{Field, Measurement};
use chrono::{DateTime, TimeZone, Utc};

mod columns_tests;

pub fn measured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn complete_measurement() -> Measurement {
    Measurement {
        server: Field::Present("TWL-KOM - Ludwigshafen (id = 10291)".to_string()),
        latency: Field::Present(12.42),
        download: Field::Present(103.41),
        upload: Field::Present(9.41),
        packet_loss: Field::Present(0.0),
    }
}

pub fn empty_measurement() -> Measurement {
    Measurement {
        server: Field::Absent(FieldError::missing_line(3)),
        latency: Field::Absent(FieldError::missing_line(5)),
        download: Field::Absent(FieldError::missing_line(6)),
        upload: Field::Absent(FieldError::missing_line(7)),
        packet_loss: Field::Absent(FieldError::missing_line(8)),
    }
}
