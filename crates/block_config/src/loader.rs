//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::BlockConfig;
use std::path::Path;
use tracing::debug;

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "block.toml";

/// Loads and validates `block.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<BlockConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<BlockConfig, ConfigError> {
    debug!(path = %path.display(), "loading configuration");
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `block.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<BlockConfig, ConfigError> {
    let config: BlockConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.diagnostics.validate()?;
    Ok(config)
}
