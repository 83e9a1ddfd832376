//! Fail-fast reporting of diagnostics.

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use crate::renderer::render_prefix;
use block_config::DiagnosticsConfig;
use std::io::{self, Write};
use std::process;
use tracing::{trace, warn};

/// Exit status used when a propagated diagnostic terminates the process.
pub const EXIT_STATUS: i32 = 1;

/// What [`Reporter::report`] did with a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A `Pass` diagnostic was dropped without output.
    Suppressed,
    /// The rendered text was written; the caller should stop.
    Emitted,
}

/// Writes diagnostics to an output stream according to a [`DiagnosticsConfig`].
///
/// This is the non-terminating half of [`propagate`]: it renders and emits,
/// and leaves it to the caller to act on [`Outcome::Emitted`].
pub struct Reporter<W> {
    out: W,
    config: DiagnosticsConfig,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W, config: DiagnosticsConfig) -> Self {
        Self { out, config }
    }

    /// Returns `true` if a diagnostic of `kind` must be emitted under `config`.
    pub fn should_emit(kind: DiagnosticKind, config: &DiagnosticsConfig) -> bool {
        !kind.is_pass() || config.report_pass_diagnostics
    }

    /// Renders and writes `diag` unless it is a suppressed `Pass`.
    ///
    /// Rendering uses the diagnostic's bound renderer. If that fails, for
    /// example because the source file is gone, the prefix form is written
    /// instead so the diagnostic itself is never lost.
    pub fn report(&mut self, diag: &Diagnostic<'_>, extra: Option<&str>) -> io::Result<Outcome> {
        if !Self::should_emit(diag.kind(), &self.config) {
            trace!(%diag, "suppressed pass diagnostic");
            return Ok(Outcome::Suppressed);
        }

        let text = diag.render(extra).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to prefix rendering");
            render_prefix(diag)
        });
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(Outcome::Emitted)
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Reporter<io::Stderr> {
    /// Creates a reporter writing to standard error.
    pub fn stderr(config: DiagnosticsConfig) -> Self {
        Self::new(io::stderr(), config)
    }
}

/// Reports `diag` on standard error and exits with [`EXIT_STATUS`].
///
/// A `Pass` diagnostic returns immediately with no output unless
/// `report_pass_diagnostics` is enabled in the process-wide configuration
/// ([`block_config::current`]). Every other kind terminates the process.
pub fn propagate(diag: &Diagnostic<'_>, extra: Option<&str>) {
    let mut reporter = Reporter::stderr(*block_config::current());
    match reporter.report(diag, extra) {
        Ok(Outcome::Suppressed) => {}
        Ok(Outcome::Emitted) => process::exit(EXIT_STATUS),
        Err(err) => {
            warn!(error = %err, %diag, "failed to write diagnostic");
            process::exit(EXIT_STATUS)
        }
    }
}
