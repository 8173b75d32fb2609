//! Delimited substring extraction

use crate::error::FieldError;

/// Extract the trimmed text following the first `start` token of `line`.
///
/// With an `end` token that occurs after `start`, the result stops just
/// before it. Otherwise the result runs to the end of the line.
pub fn extract_field<'a>(
    line: &'a str,
    start: &str,
    end: Option<&str>,
) -> Result<&'a str, FieldError> {
    let start_index = line
        .find(start)
        .ok_or_else(|| FieldError::missing_delimiter(start, line))?;
    let rest = &line[start_index + start.len()..];

    let value = match end.and_then(|token| rest.find(token)) {
        Some(end_index) => &rest[..end_index],
        None => rest,
    };

    Ok(value.trim())
}
