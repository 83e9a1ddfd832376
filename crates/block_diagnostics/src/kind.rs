//! The closed set of diagnostic classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of outcome a diagnostic describes.
///
/// `Pass` is the success value: it can be built and rendered like any other
/// kind, but propagation ignores it unless configured otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Success; nothing went wrong.
    Pass,
    /// A failure with no more specific kind.
    Error,
    /// The requested feature is planned but not built yet.
    NotImplementedError,
    /// The requested feature has been withdrawn.
    DeprecationError,
    /// A numeric value or conversion overflowed.
    OverflowError,
}

impl DiagnosticKind {
    /// Every kind, in declaration order.
    pub const ALL: [DiagnosticKind; 5] = [
        DiagnosticKind::Pass,
        DiagnosticKind::Error,
        DiagnosticKind::NotImplementedError,
        DiagnosticKind::DeprecationError,
        DiagnosticKind::OverflowError,
    ];

    /// The canonical display name, identical to the variant identifier.
    pub const fn name(self) -> &'static str {
        match self {
            DiagnosticKind::Pass => "Pass",
            DiagnosticKind::Error => "Error",
            DiagnosticKind::NotImplementedError => "NotImplementedError",
            DiagnosticKind::DeprecationError => "DeprecationError",
            DiagnosticKind::OverflowError => "OverflowError",
        }
    }

    /// Returns `true` if this is [`Pass`](DiagnosticKind::Pass).
    pub fn is_pass(self) -> bool {
        self == DiagnosticKind::Pass
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a canonical kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic kind '{input}'")]
pub struct ParseKindError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for DiagnosticKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagnosticKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError {
                input: s.to_string(),
            })
    }
}
