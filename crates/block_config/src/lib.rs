//! Parsing and validation of `block.toml` configuration files.
//!
//! This crate reads the `[diagnostics]` table into a strongly-typed
//! [`DiagnosticsConfig`] and holds the process-wide copy that diagnostic
//! rendering and propagation consult.

#![warn(missing_docs)]

pub mod error;
pub mod global;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use global::{current, install};
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
