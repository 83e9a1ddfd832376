//! Errors raised while rendering a diagnostic.

use block_source::SourceError;
use std::collections::TryReserveError;
use std::path::PathBuf;

/// Errors that can occur when rendering a diagnostic to text.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The referenced source file could not be opened or read.
    #[error("source file '{}' is unavailable: {source}", path.display())]
    SourceUnavailable {
        /// The file the diagnostic points at.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The referenced line lies past the end of the file.
    #[error(
        "line {line} is out of range for '{}' ({lines_read} lines read)",
        path.display()
    )]
    LineOutOfRange {
        /// The file the diagnostic points at.
        path: PathBuf,
        /// The requested 1-based line.
        line: u32,
        /// How many lines the file had.
        lines_read: u32,
    },

    /// The output buffer could not be allocated.
    #[error("failed to allocate diagnostic text: {0}")]
    Allocation(#[from] TryReserveError),
}

impl From<SourceError> for RenderError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable { path, source } => {
                RenderError::SourceUnavailable { path, source }
            }
            SourceError::LineOutOfRange {
                path,
                line,
                lines_read,
            } => RenderError::LineOutOfRange {
                path,
                line,
                lines_read,
            },
        }
    }
}
