//! Positional parser for speedtest text output
//!
//! Turns one raw report into a [`Measurement`](crate::models::Measurement)
//! where every field succeeds or fails on its own. Nothing in here returns a
//! fatal error: an unparsable report yields a measurement with all five
//! fields absent.
//!
//! ## Architecture
//!
//! - [`lines`] - Line splitting with bounds-checked access
//! - [`field`] - Delimited substring extraction from one line
//! - [`metric`] - Conversion of extracted text to `f32`
//! - [`assembler`] - Fixed field layout and per-field orchestration
//!
//! ## Usage
//!
//! ```rust
//! use speedtest_recorder::parser::parse;
//!
//! let measurement = parse("an error occurred");
//! assert!(measurement.server.is_absent());
//! assert!(measurement.packet_loss.is_absent());
//! ```

pub mod assembler;
pub mod field;
pub mod lines;
pub mod metric;

#[cfg(test)]
mod tests;

pub use assembler::parse;
pub use field::extract_field;
pub use lines::Lines;
pub use metric::parse_metric;
