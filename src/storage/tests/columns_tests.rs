//! Tests for the field-to-column table and row construction

use super::super::columns::{FIELD_COLUMNS, column_names, to_storage_values};
use super::{complete_measurement, empty_measurement, measured_at};
use crate::error::FieldError;
use crate::models::{ColumnType, Field, StorageValue};

#[test]
fn test_column_order() {
    assert_eq!(
        column_names(),
        [
            "measured_at",
            "server",
            "latency_ms",
            "download_mbps",
            "upload_mbps",
            "packet_loss_percent"
        ]
    );
}

#[test]
fn test_column_types() {
    let types: Vec<_> = FIELD_COLUMNS.iter().map(|c| c.column_type).collect();
    assert_eq!(
        types,
        vec![
            ColumnType::Text,
            ColumnType::Float,
            ColumnType::Float,
            ColumnType::Float,
            ColumnType::Float
        ]
    );
}

#[test]
fn test_complete_row() {
    let row = to_storage_values(measured_at(), &complete_measurement());

    assert_eq!(row.len(), 6);
    assert_eq!(row[0], StorageValue::Timestamp(measured_at()));
    assert_eq!(
        row[1],
        StorageValue::Text("TWL-KOM - Ludwigshafen (id = 10291)".to_string())
    );
    assert_eq!(row[2], StorageValue::Float(12.42));
    assert_eq!(row[3], StorageValue::Float(103.41));
    assert_eq!(row[4], StorageValue::Float(9.41));
    assert_eq!(row[5], StorageValue::Float(0.0));
}

#[test]
fn test_all_absent_row() {
    let row = to_storage_values(measured_at(), &empty_measurement());

    assert_eq!(row.len(), 6);
    assert_eq!(row[0], StorageValue::Timestamp(measured_at()));
    assert_eq!(row[1], StorageValue::Null(ColumnType::Text));
    for index in 2..6 {
        assert_eq!(row[index], StorageValue::Null(ColumnType::Float));
    }
}

#[test]
fn test_single_absent_field_maps_to_null_in_place() {
    let mut measurement = complete_measurement();
    measurement.packet_loss = Field::Absent(FieldError::numeric_parse("Not available."));

    let row = to_storage_values(measured_at(), &measurement);

    assert!(row[5].is_null());
    assert_eq!(row[2], StorageValue::Float(12.42));
    assert_eq!(row[3], StorageValue::Float(103.41));
    assert_eq!(row[4], StorageValue::Float(9.41));
    assert!(!row[1].is_null());
}

#[test]
fn test_row_width_is_fixed() {
    let mut measurement = empty_measurement();
    measurement.upload = Field::Present(1.0);

    for m in [complete_measurement(), empty_measurement(), measurement] {
        let row = to_storage_values(measured_at(), &m);
        let types: Vec<_> = row.iter().map(|v| v.column_type()).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Timestamp,
                ColumnType::Text,
                ColumnType::Float,
                ColumnType::Float,
                ColumnType::Float,
                ColumnType::Float
            ]
        );
    }
}

#[test]
fn test_reason_does_not_affect_row() {
    let mut a = empty_measurement();
    let mut b = empty_measurement();
    a.latency = Field::Absent(FieldError::missing_delimiter(":", "x"));
    b.latency = Field::Absent(FieldError::numeric_parse("y"));

    assert_eq!(
        to_storage_values(measured_at(), &a),
        to_storage_values(measured_at(), &b)
    );
}
