//! Source-line extraction for diagnostic context.
//!
//! This crate reads a single line out of a source file with a scan that stops
//! at end-of-file, and truncates the captured text to a display width so a
//! diagnostic never carries an unbounded source excerpt.

#![warn(missing_docs)]

pub mod error;
pub mod line;
pub mod truncate;

pub use error::SourceError;
pub use line::{read_cap, read_line, SourceLine};
pub use truncate::{truncate_display, TRUNCATION_MARKER};
