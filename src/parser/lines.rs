//! Line access over raw tool output

use crate::error::FieldError;

/// Raw text split on `\n`, kept exactly as printed.
///
/// Blank lines are preserved and nothing is trimmed, so indices match the
/// tool's line positions.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Lines<'a> {
    /// Split raw output on `\n`
    pub fn split(raw: &'a str) -> Self {
        Self {
            lines: raw.split('\n').collect(),
        }
    }

    /// Get the line at `index`, or [`FieldError::MissingLine`] when out of bounds
    pub fn line_at(&self, index: usize) -> Result<&'a str, FieldError> {
        self.lines
            .get(index)
            .copied()
            .ok_or_else(|| FieldError::missing_line(index))
    }

    /// Number of lines, including blank ones
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
