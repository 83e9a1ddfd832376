//! Macros for creating diagnostics at the current source location.
//!
//! Each macro captures `file!()`, `line!()` and `column!()` at the call site
//! and binds the default source-context renderer.

/// Creates a diagnostic of the given kind at the call site.
///
/// An optional second argument binds a different renderer.
///
/// # Example
///
/// ```
/// use block_diagnostics::{diagnostic, DiagnosticKind, PREFIX};
///
/// let diag = diagnostic!(DiagnosticKind::Error, &PREFIX);
/// assert_eq!(diag.source_file(), file!());
/// assert!(diag.render(None).unwrap().ends_with(" Error"));
/// ```
#[macro_export]
macro_rules! diagnostic {
    ($kind:expr) => {
        $crate::Diagnostic::new($kind, file!(), line!(), column!())
    };
    ($kind:expr, $renderer:expr) => {
        $crate::Diagnostic::new($kind, file!(), line!(), column!()).with_renderer($renderer)
    };
}

/// Creates a `Pass` diagnostic at the call site.
#[macro_export]
macro_rules! block_pass {
    () => {
        $crate::diagnostic!($crate::DiagnosticKind::Pass)
    };
}

/// Creates a generic `Error` diagnostic at the call site.
#[macro_export]
macro_rules! block_error {
    () => {
        $crate::diagnostic!($crate::DiagnosticKind::Error)
    };
}

/// Creates a `NotImplementedError` diagnostic at the call site.
#[macro_export]
macro_rules! block_not_implemented {
    () => {
        $crate::diagnostic!($crate::DiagnosticKind::NotImplementedError)
    };
}

/// Creates a `DeprecationError` diagnostic at the call site.
#[macro_export]
macro_rules! block_deprecation {
    () => {
        $crate::diagnostic!($crate::DiagnosticKind::DeprecationError)
    };
}

/// Creates an `OverflowError` diagnostic at the call site.
#[macro_export]
macro_rules! block_overflow {
    () => {
        $crate::diagnostic!($crate::DiagnosticKind::OverflowError)
    };
}
