//! Block CLI — render and propagate diagnostics from the command line.
//!
//! Provides `blk render` to print a diagnostic's text, `blk throw` to run the
//! fail-fast propagation path, and `blk kinds` to list the diagnostic kinds.

#![warn(missing_docs)]

mod render;
mod settings;
mod throw;

use std::process;

use block_diagnostics::DiagnosticKind;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Block — structured diagnostics.
#[derive(Parser, Debug)]
#[command(name = "blk", version, about = "Block diagnostics")]
pub struct Cli {
    /// Enable verbose (debug-level) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `block.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Report and terminate on `Pass` diagnostics too.
    #[arg(long, global = true)]
    pub report_pass: bool,

    /// Maximum characters of source context to show.
    #[arg(long, global = true)]
    pub max_line_width: Option<usize>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the rendered text of a diagnostic.
    Render(RenderArgs),
    /// Propagate a diagnostic: report it and exit unless it is a suppressed `Pass`.
    Throw(ThrowArgs),
    /// List the diagnostic kinds.
    Kinds,
}

/// Where a diagnostic was raised.
#[derive(Args, Debug)]
pub struct LocationArgs {
    /// Diagnostic kind (e.g. `OverflowError`).
    pub kind: DiagnosticKind,

    /// Source file the diagnostic refers to.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub file: String,

    /// 1-based line number.
    pub line: u32,

    /// Column number; 0 refers to the whole line.
    #[arg(default_value_t = 0)]
    pub column: u32,

    /// Extra context appended to the first line.
    #[arg(long)]
    pub context: Option<String>,
}

/// Arguments for the `blk render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// The diagnostic to render.
    #[command(flatten)]
    pub location: LocationArgs,

    /// Render only `file:line:col KIND`, without reading the source.
    #[arg(long)]
    pub prefix: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `blk throw` subcommand.
#[derive(Args, Debug)]
pub struct ThrowArgs {
    /// The diagnostic to propagate.
    #[command(flatten)]
    pub location: LocationArgs,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = settings::install_from_cli(&cli).and_then(|()| match cli.command {
        Command::Render(ref args) => render::run(args),
        Command::Throw(ref args) => throw::run(args),
        Command::Kinds => {
            for kind in DiagnosticKind::ALL {
                println!("{kind}");
            }
            Ok(0)
        }
    });

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Sends log output to stderr, filtered by `BLOCK_LOG`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("BLOCK_LOG").unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
