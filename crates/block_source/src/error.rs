//! Error types for source-line extraction.

use std::path::PathBuf;

/// Errors that can occur while fetching a line of source context.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source file could not be opened or read.
    #[error("source file '{}' is unavailable: {source}", path.display())]
    Unavailable {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The file ended before the requested line was reached.
    #[error(
        "line {line} is out of range for '{}' ({lines_read} lines read)",
        path.display()
    )]
    LineOutOfRange {
        /// The path that was scanned.
        path: PathBuf,
        /// The 1-based line that was requested.
        line: u32,
        /// How many lines were read before end-of-file.
        lines_read: u32,
    },
}
