//! # lot-config
//!
//! Layered configuration loading for parklot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PARKLOT_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.parklot/config.toml`
//! 4. User-level `~/.config/parklot/config.toml`
//! 5. Built-in defaults (10 INR per hour, 5 INR minimum)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PARKLOT_TARIFF__HOURLY_RATE` -> `tariff.hourly_rate`,
//! `PARKLOT_DISPLAY__UTC` -> `display.utc`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lot_config::LotConfig;
//!
//! let config = LotConfig::load_with_dotenv().expect("config");
//! let tariff = config.tariff.to_tariff().expect("tariff");
//! println!("{} {} per hour", tariff.hourly_rate(), tariff.currency());
//! ```

mod display;
mod error;
mod tariff;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use tariff::TariffConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PARKLOT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LotConfig {
    #[serde(default)]
    pub tariff: TariffConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl LotConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with `path` layered above the project file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(&Self::figment_with_file(path)?)
    }

    /// Build the default provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_layers().merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Build the provider chain with an explicit TOML file below the env layer.
    pub fn figment_with_file(path: &Path) -> Result<Figment, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        Ok(Self::file_layers()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".parklot/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Extract and validate. A tariff that cannot bill is a load error.
    fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.tariff.to_tariff()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("parklot").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LotConfig::default();
        assert!((config.tariff.hourly_rate - 10.0).abs() < f64::EPSILON);
        assert!(!config.display.utc);
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let err = LotConfig::figment_with_file(Path::new("/nonexistent/parklot.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::MissingFile { .. }));
        assert!(err.to_string().contains("/nonexistent/parklot.toml"));
    }
}
