//! Typed error variants for the ttyhop-config crate.

use thiserror::Error;

/// Errors that can occur when loading the configuration file.
///
/// Callers that only need a usable configuration should prefer
/// [`crate::Config::load`], which logs these and falls back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}
