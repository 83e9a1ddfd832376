//! The `blk render` subcommand.

use block_diagnostics::{Diagnostic, DiagnosticRecord, Render, PREFIX, SOURCE_CONTEXT};

use crate::{RenderArgs, ReportFormat};

/// Renders the requested diagnostic to stdout. Returns exit code 0 on success.
pub fn run(args: &RenderArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let location = &args.location;
    let renderer: &dyn Render = if args.prefix { &PREFIX } else { &SOURCE_CONTEXT };
    let diag = Diagnostic::new(location.kind, &location.file, location.line, location.column)
        .with_renderer(renderer);

    let text = diag.render(location.context.as_deref())?;
    match args.format {
        ReportFormat::Text => println!("{text}"),
        ReportFormat::Json => {
            let record = DiagnosticRecord::new(&diag, text);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(0)
}
