//! Diagnostic values, rendering strategies, and fail-fast propagation.
//!
//! A [`Diagnostic`] records what went wrong ([`DiagnosticKind`]) and where,
//! along with the [`Render`] strategy that turns it into text. The built-in
//! [`PrefixRenderer`] produces `file:line:col KIND`; the default
//! [`SourceContextRenderer`] also quotes the offending source line.
//! [`propagate`] reports a diagnostic on stderr and terminates the process,
//! unless it is a suppressed `Pass`.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod kind;
pub mod macros;
pub mod propagate;
pub mod record;
pub mod renderer;

pub use diagnostic::Diagnostic;
pub use error::RenderError;
pub use kind::{DiagnosticKind, ParseKindError};
pub use propagate::{propagate, Outcome, Reporter, EXIT_STATUS};
pub use record::DiagnosticRecord;
pub use renderer::{
    render_prefix, render_rich, PrefixRenderer, Render, SourceContextRenderer, PREFIX,
    SOURCE_CONTEXT,
};
