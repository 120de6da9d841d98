//! # lot-core
//!
//! Domain types for the parking lot: the arrival-ordered [`ParkingLedger`],
//! the [`OccupancyRecord`]s it holds, and the [`Tariff`] used to turn a stay
//! into a [`Bill`].
//!
//! Nothing here reads the clock. Every operation that needs "now" takes the
//! timestamp as an argument, so callers decide where time comes from.

pub mod entities;
pub mod errors;
pub mod ledger;
pub mod tariff;
pub mod timefmt;

pub use entities::{Bill, OccupancyRecord};
pub use errors::CoreError;
pub use ledger::ParkingLedger;
pub use tariff::Tariff;
