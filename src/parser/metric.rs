//! Numeric conversion of extracted field text

use crate::error::FieldError;

/// Parse trimmed field text as a 32-bit float.
///
/// Text such as `Not available.` yields [`FieldError::NumericParse`]. The
/// non-finite spellings `inf` and `NaN` are rejected as well.
pub fn parse_metric(text: &str) -> Result<f32, FieldError> {
    text.parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldError::numeric_parse(text))
}
