//! Pricing configuration.

use lot_core::Tariff;
use lot_core::tariff::{DEFAULT_CURRENCY, HOURLY_RATE, MINIMUM_CHARGE};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_hourly_rate() -> f64 {
    HOURLY_RATE
}

const fn default_minimum_charge() -> f64 {
    MINIMUM_CHARGE
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TariffConfig {
    /// Charge per hour of parking.
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    /// Floor applied to every bill.
    #[serde(default = "default_minimum_charge")]
    pub minimum_charge: f64,

    /// Label printed after amounts (e.g., "INR").
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl TariffConfig {
    /// Validate and convert into the domain tariff.
    pub fn to_tariff(&self) -> Result<Tariff, ConfigError> {
        Tariff::new(self.hourly_rate, self.minimum_charge, self.currency.clone())
            .map_err(ConfigError::from)
    }
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            minimum_charge: default_minimum_charge(),
            currency: default_currency(),
        }
    }
}
