//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {path}")]
    MissingFile { path: String },

    /// The `[tariff]` section does not describe a usable tariff.
    #[error("Invalid tariff configuration: {0}")]
    Tariff(#[from] lot_core::CoreError),
}
