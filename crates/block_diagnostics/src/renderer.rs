//! Rendering strategies that turn a [`Diagnostic`] into text.

use crate::diagnostic::Diagnostic;
use crate::error::RenderError;
use std::path::Path;

/// A strategy for rendering diagnostics into owned strings.
///
/// Implementations are selected per diagnostic at construction time. New
/// output styles are added by implementing this trait.
pub trait Render: Send + Sync {
    /// Renders `diag`, optionally enriched with caller-supplied `extra` context.
    fn render(&self, diag: &Diagnostic<'_>, extra: Option<&str>) -> Result<String, RenderError>;

    /// A short identifier used in debug output.
    fn name(&self) -> &'static str;
}

/// Renders only the location and kind: `file:line:col KIND`.
///
/// Never touches the filesystem. Extra context is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefixRenderer;

/// Renders the prefix followed by the referenced source line.
///
/// Produces output like:
/// ```text
/// sample.src:3:5 OverflowError: while folding constants
/// x = a + b;
/// ```
/// When no extra context is given the first line is the bare prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceContextRenderer {
    max_width: Option<usize>,
}

/// The shared prefix renderer.
pub static PREFIX: PrefixRenderer = PrefixRenderer;

/// The shared source-context renderer, using the process-wide line width.
pub static SOURCE_CONTEXT: SourceContextRenderer = SourceContextRenderer::new();

const CONTEXT_SEPARATOR: &str = ": ";

impl SourceContextRenderer {
    /// A renderer that reads the line width from [`block_config::current`].
    pub const fn new() -> Self {
        Self { max_width: None }
    }

    /// A renderer with a fixed line width.
    ///
    /// Widths below [`block_config::MIN_LINE_WIDTH`] are raised to it, the
    /// same floor `block.toml` validation enforces.
    pub const fn with_max_width(max_width: usize) -> Self {
        let max_width = if max_width < block_config::MIN_LINE_WIDTH {
            block_config::MIN_LINE_WIDTH
        } else {
            max_width
        };
        Self {
            max_width: Some(max_width),
        }
    }

    /// The width captured source lines are truncated to.
    pub fn max_width(&self) -> usize {
        self.max_width
            .unwrap_or_else(|| block_config::current().max_line_width)
    }
}

impl Render for PrefixRenderer {
    fn render(&self, diag: &Diagnostic<'_>, _extra: Option<&str>) -> Result<String, RenderError> {
        Ok(render_prefix(diag))
    }

    fn name(&self) -> &'static str {
        "prefix"
    }
}

impl Render for SourceContextRenderer {
    fn render(&self, diag: &Diagnostic<'_>, extra: Option<&str>) -> Result<String, RenderError> {
        let source = block_source::read_line(
            Path::new(diag.source_file()),
            diag.line(),
            self.max_width(),
        )?;
        compose(diag, extra, &source.text)
    }

    fn name(&self) -> &'static str {
        "source-context"
    }
}

/// Renders `file:line:col KIND`.
pub fn render_prefix(diag: &Diagnostic<'_>) -> String {
    diag.to_string()
}

/// Renders the prefix, optional context, and the referenced source line.
///
/// Uses the process-wide line width. Fails with
/// [`RenderError::SourceUnavailable`] if the file cannot be opened and
/// [`RenderError::LineOutOfRange`] if it ends before `diag.line()`.
pub fn render_rich(diag: &Diagnostic<'_>, extra: Option<&str>) -> Result<String, RenderError> {
    SOURCE_CONTEXT.render(diag, extra)
}

/// Joins the header and source line into a buffer sized to fit exactly.
fn compose(
    diag: &Diagnostic<'_>,
    extra: Option<&str>,
    source_line: &str,
) -> Result<String, RenderError> {
    let prefix = render_prefix(diag);
    let extra = extra.filter(|text| !text.is_empty());
    let len = prefix.len()
        + extra.map_or(0, |text| CONTEXT_SEPARATOR.len() + text.len())
        + 1
        + source_line.len();

    let mut out = String::new();
    out.try_reserve_exact(len)?;
    out.push_str(&prefix);
    if let Some(text) = extra {
        out.push_str(CONTEXT_SEPARATOR);
        out.push_str(text);
    }
    out.push('\n');
    out.push_str(source_line);
    debug_assert_eq!(out.len(), len);
    Ok(out)
}
