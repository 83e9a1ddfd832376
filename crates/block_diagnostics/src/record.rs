//! Owned, serializable snapshot of a rendered diagnostic.

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use serde::Serialize;

/// A diagnostic together with its rendered text, detached from borrowed data.
///
/// Used for machine-readable output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    /// The diagnostic kind.
    pub kind: DiagnosticKind,
    /// The file the diagnostic was raised in.
    pub file: String,
    /// The 1-based line number.
    pub line: u32,
    /// The column number, `0` for the whole line.
    pub column: u32,
    /// The rendered text.
    pub message: String,
}

impl DiagnosticRecord {
    /// Captures `diag` and the text it rendered to.
    pub fn new(diag: &Diagnostic<'_>, message: impl Into<String>) -> Self {
        Self {
            kind: diag.kind(),
            file: diag.source_file().to_string(),
            line: diag.line(),
            column: diag.column(),
            message: message.into(),
        }
    }
}
