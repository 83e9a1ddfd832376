//! The diagnostic value raised at a fault site.

use crate::error::RenderError;
use crate::kind::DiagnosticKind;
use crate::renderer::{Render, SOURCE_CONTEXT};
use std::fmt;

/// One diagnostic occurrence: its kind, where it was raised, and how to render it.
///
/// A `Diagnostic` borrows its file path and renderer, so building one never
/// allocates; the path is usually a `file!()` literal. Fields are read-only
/// after construction and rendering never modifies the value.
///
/// `column == 0` means the diagnostic refers to the whole line.
#[derive(Clone, Copy)]
pub struct Diagnostic<'a> {
    kind: DiagnosticKind,
    source_file: &'a str,
    line: u32,
    column: u32,
    renderer: &'a dyn Render,
}

impl<'a> Diagnostic<'a> {
    /// Creates a diagnostic bound to the default [`SourceContextRenderer`](crate::SourceContextRenderer).
    ///
    /// `source_file` should name a file. An empty path is accepted and
    /// renders as `:line:col KIND`; source-context rendering of it fails with
    /// [`RenderError::SourceUnavailable`].
    pub fn new(kind: DiagnosticKind, source_file: &'a str, line: u32, column: u32) -> Self {
        Self {
            kind,
            source_file,
            line,
            column,
            renderer: &SOURCE_CONTEXT,
        }
    }

    /// Creates a [`Pass`](DiagnosticKind::Pass) diagnostic.
    pub fn pass(source_file: &'a str, line: u32, column: u32) -> Self {
        Self::new(DiagnosticKind::Pass, source_file, line, column)
    }

    /// Creates a generic [`Error`](DiagnosticKind::Error) diagnostic.
    pub fn error(source_file: &'a str, line: u32, column: u32) -> Self {
        Self::new(DiagnosticKind::Error, source_file, line, column)
    }

    /// Creates a [`NotImplementedError`](DiagnosticKind::NotImplementedError) diagnostic.
    pub fn not_implemented(source_file: &'a str, line: u32, column: u32) -> Self {
        Self::new(DiagnosticKind::NotImplementedError, source_file, line, column)
    }

    /// Creates a [`DeprecationError`](DiagnosticKind::DeprecationError) diagnostic.
    pub fn deprecation(source_file: &'a str, line: u32, column: u32) -> Self {
        Self::new(DiagnosticKind::DeprecationError, source_file, line, column)
    }

    /// Creates an [`OverflowError`](DiagnosticKind::OverflowError) diagnostic.
    pub fn overflow(source_file: &'a str, line: u32, column: u32) -> Self {
        Self::new(DiagnosticKind::OverflowError, source_file, line, column)
    }

    /// Binds a different rendering strategy.
    pub fn with_renderer(mut self, renderer: &'a dyn Render) -> Self {
        self.renderer = renderer;
        self
    }

    /// The classification of this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The path of the file the diagnostic was raised in.
    pub fn source_file(&self) -> &'a str {
        self.source_file
    }

    /// The 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The column number, or `0` for the whole line.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The bound rendering strategy.
    pub fn renderer(&self) -> &'a dyn Render {
        self.renderer
    }

    /// Returns `true` for a [`Pass`](DiagnosticKind::Pass) diagnostic.
    pub fn is_pass(&self) -> bool {
        self.kind.is_pass()
    }

    /// Renders with the bound renderer, adding `extra` context when given.
    pub fn render(&self, extra: Option<&str>) -> Result<String, RenderError> {
        self.renderer.render(self, extra)
    }

    /// Converts into a `Result`: `Pass` becomes `Ok(())`, any other kind `Err(self)`.
    pub fn into_result(self) -> Result<(), Diagnostic<'a>> {
        if self.is_pass() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Reports this diagnostic and terminates the process unless it is suppressed.
    ///
    /// See [`propagate`](crate::propagate).
    pub fn propagate(&self, extra: Option<&str>) {
        crate::propagate::propagate(self, extra)
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} {}",
            self.source_file, self.line, self.column, self.kind
        )
    }
}

impl fmt::Debug for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostic")
            .field("kind", &self.kind)
            .field("source_file", &self.source_file)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

impl std::error::Error for Diagnostic<'_> {}
