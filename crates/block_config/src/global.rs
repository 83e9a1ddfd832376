//! Process-wide diagnostics settings, fixed once at startup.

use crate::error::ConfigError;
use crate::types::DiagnosticsConfig;
use std::sync::OnceLock;
use tracing::debug;

static INSTALLED: OnceLock<DiagnosticsConfig> = OnceLock::new();
static DEFAULTS: DiagnosticsConfig = DiagnosticsConfig::DEFAULT;

/// Installs the settings for the rest of the process.
///
/// Only the first call succeeds; later calls return
/// [`ConfigError::AlreadyInstalled`] and leave the installed value untouched.
pub fn install(config: DiagnosticsConfig) -> Result<(), ConfigError> {
    config.validate()?;
    INSTALLED
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    debug!(?config, "installed diagnostics configuration");
    Ok(())
}

/// Returns the installed settings, or the defaults if none were installed.
pub fn current() -> &'static DiagnosticsConfig {
    INSTALLED.get().unwrap_or(&DEFAULTS)
}
