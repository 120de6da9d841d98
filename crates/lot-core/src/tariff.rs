//! Pricing for a stay in the lot.
//!
//! A stay is charged pro rata at the hourly rate, with a floor:
//!
//! ```text
//! raw = (seconds / 3600) * hourly_rate
//! fee = max(raw, minimum_charge)
//! ```
//!
//! The floor is applied to the computed fee, not to the elapsed time.

use crate::errors::CoreError;

/// Nominal lot size. Admission does not check it; space ids keep counting past it.
pub const MAX_SPACES: u32 = 10;

/// Charge per full hour of parking.
pub const HOURLY_RATE: f64 = 10.0;

/// Half-hour rate from the posted price list. No fee branch uses it.
pub const HALF_HOUR_RATE: f64 = 5.0;

/// Smallest fee any stay is billed.
pub const MINIMUM_CHARGE: f64 = 5.0;

/// Currency label printed on bills.
pub const DEFAULT_CURRENCY: &str = "INR";

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    hourly_rate: f64,
    minimum_charge: f64,
    currency: String,
}

impl Tariff {
    /// Build a tariff, rejecting amounts that would produce nonsense bills.
    pub fn new(
        hourly_rate: f64,
        minimum_charge: f64,
        currency: impl Into<String>,
    ) -> Result<Self, CoreError> {
        validate_amount("hourly_rate", hourly_rate)?;
        validate_amount("minimum_charge", minimum_charge)?;

        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(CoreError::InvalidCurrency);
        }

        Ok(Self {
            hourly_rate,
            minimum_charge,
            currency,
        })
    }

    #[must_use]
    pub const fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    #[must_use]
    pub const fn minimum_charge(&self) -> f64 {
        self.minimum_charge
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Fee for a stay of `seconds`. Negative input is treated as zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fee_for_seconds(&self, seconds: i64) -> f64 {
        let hours = seconds.max(0) as f64 / SECONDS_PER_HOUR;
        let raw = hours * self.hourly_rate;
        if raw < self.minimum_charge {
            self.minimum_charge
        } else {
            raw
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            hourly_rate: HOURLY_RATE,
            minimum_charge: MINIMUM_CHARGE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

fn validate_amount(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidAmount { field, value })
    }
}
