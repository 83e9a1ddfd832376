//! Configuration types deserialized from `block.toml`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default maximum width, in characters, of a captured source line.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 80;

/// Smallest accepted line width; leaves room for the truncation marker.
pub const MIN_LINE_WIDTH: usize = 4;

/// The top-level configuration parsed from `block.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockConfig {
    /// Diagnostic rendering and propagation settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Settings for diagnostic rendering and propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// Maximum number of characters of a source line shown as context.
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,
    /// Whether propagating a `Pass` diagnostic reports it and terminates.
    #[serde(default)]
    pub report_pass_diagnostics: bool,
}

impl DiagnosticsConfig {
    /// The built-in settings used when nothing else is configured.
    pub const DEFAULT: DiagnosticsConfig = DiagnosticsConfig {
        max_line_width: DEFAULT_MAX_LINE_WIDTH,
        report_pass_diagnostics: false,
    };

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_width < MIN_LINE_WIDTH {
            return Err(ConfigError::ValidationError(format!(
                "diagnostics.max_line_width must be at least {MIN_LINE_WIDTH}, got {}",
                self.max_line_width
            )));
        }
        Ok(())
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn default_max_line_width() -> usize {
    DEFAULT_MAX_LINE_WIDTH
}
