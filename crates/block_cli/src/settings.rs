//! Resolution of the process-wide diagnostics configuration from CLI flags.

use std::path::Path;

use block_config::{ConfigError, DiagnosticsConfig};

use crate::Cli;

/// Builds the configuration from `--config` and flag overrides.
///
/// Flags take precedence over the configuration file, which takes precedence
/// over the built-in defaults.
pub fn resolve(cli: &Cli) -> Result<DiagnosticsConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => block_config::load_config_file(Path::new(path))?.diagnostics,
        None => DiagnosticsConfig::default(),
    };
    if cli.report_pass {
        config.report_pass_diagnostics = true;
    }
    if let Some(width) = cli.max_line_width {
        config.max_line_width = width;
    }
    config.validate()?;
    Ok(config)
}

/// Resolves and installs the configuration for the rest of the process.
pub fn install_from_cli(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve(cli)?;
    block_config::install(config)?;
    Ok(())
}
