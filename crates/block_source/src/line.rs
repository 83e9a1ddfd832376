//! Bounded line scanning over a file on disk.

use crate::error::SourceError;
use crate::truncate::truncate_display;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// A single line of source text captured for diagnostic context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// The 1-based line number.
    pub number: u32,
    /// The line text without its terminator, cut to the display width.
    pub text: String,
    /// Whether `text` was shortened to fit the display width.
    pub truncated: bool,
}

/// Reads line `line` (1-based) of the file at `path`.
///
/// Earlier lines are skipped without being buffered, and the scan stops as
/// soon as the target is reached or the file ends; reaching end-of-file first
/// is reported as [`SourceError::LineOutOfRange`]. Line `0` never exists.
/// At most [`read_cap`]`(max_width)` bytes of the target line are read. Bytes
/// that are not valid UTF-8 are replaced rather than rejected, and the
/// captured text is truncated to `max_width` characters.
pub fn read_line(path: &Path, line: u32, max_width: usize) -> Result<SourceLine, SourceError> {
    let unavailable = |source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    };
    let out_of_range = |lines_read| {
        debug!(path = %path.display(), line, lines_read, "source ended before target line");
        SourceError::LineOutOfRange {
            path: path.to_path_buf(),
            line,
            lines_read,
        }
    };

    let file = File::open(path).map_err(unavailable)?;
    if line == 0 {
        return Err(out_of_range(0));
    }
    let mut reader = BufReader::new(file);
    let mut lines_read = 0u32;

    debug!(path = %path.display(), line, "scanning source for context line");

    while lines_read < line - 1 {
        if reader.skip_until(b'\n').map_err(unavailable)? == 0 {
            return Err(out_of_range(lines_read));
        }
        lines_read += 1;
    }

    let mut buf = Vec::new();
    let n = reader
        .by_ref()
        .take(read_cap(max_width))
        .read_until(b'\n', &mut buf)
        .map_err(unavailable)?;
    if n == 0 {
        return Err(out_of_range(lines_read));
    }

    let raw = String::from_utf8_lossy(strip_terminator(&buf));
    let (text, truncated) = truncate_display(&raw, max_width);
    debug!(path = %path.display(), line, truncated, "captured context line");

    Ok(SourceLine {
        number: line,
        text: text.into_owned(),
        truncated,
    })
}

/// Bytes of the target line read for a display width of `max_width`.
///
/// A UTF-8 character is at most 4 bytes, so a line cut at this cap still
/// holds more than `max_width` whole characters and is truncated as usual.
pub fn read_cap(max_width: usize) -> u64 {
    max_width.saturating_add(2).saturating_mul(4) as u64
}

/// Drops a trailing `\n` or `\r\n`.
fn strip_terminator(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
