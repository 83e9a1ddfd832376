//! The `blk throw` subcommand.

use block_diagnostics::Diagnostic;
use tracing::debug;

use crate::ThrowArgs;

/// Propagates the requested diagnostic.
///
/// Only returns when the diagnostic was suppressed; every reported
/// diagnostic terminates the process from inside propagation.
pub fn run(args: &ThrowArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let location = &args.location;
    let diag = Diagnostic::new(location.kind, &location.file, location.line, location.column);
    diag.propagate(location.context.as_deref());
    debug!(%diag, "diagnostic suppressed");
    Ok(0)
}
