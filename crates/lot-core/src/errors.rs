//! Error types for the parking domain.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A tariff amount was negative, NaN, or infinite.
    #[error("Invalid tariff amount for '{field}': {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    /// The currency label shown on bills was empty.
    #[error("Currency label must not be empty")]
    InvalidCurrency,
}
