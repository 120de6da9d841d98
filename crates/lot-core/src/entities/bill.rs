use chrono::{DateTime, Utc};

use super::OccupancyRecord;
use crate::tariff::Tariff;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// The charge for one completed stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub space_id: u32,
    pub owner_name: String,
    pub plate_number: String,
    pub parked_at: DateTime<Utc>,
    pub left_at: DateTime<Utc>,
    /// Whole seconds between arrival and departure, never negative.
    pub duration_secs: i64,
    pub fee: f64,
    pub currency: String,
}

impl Bill {
    /// Price the stay of `record` ending at `left_at`. Does not touch the ledger.
    ///
    /// A departure earlier than the arrival (wall clock stepped back) counts as
    /// a zero-length stay.
    #[must_use]
    pub fn compute(record: &OccupancyRecord, left_at: DateTime<Utc>, tariff: &Tariff) -> Self {
        let duration_secs = (left_at - record.parked_at).num_seconds().max(0);
        Self {
            space_id: record.space_id,
            owner_name: record.owner_name.clone(),
            plate_number: record.plate_number.clone(),
            parked_at: record.parked_at,
            left_at,
            duration_secs,
            fee: tariff.fee_for_seconds(duration_secs),
            currency: tariff.currency().to_string(),
        }
    }

    /// Length of the stay in fractional hours.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hours(&self) -> f64 {
        self.duration_secs as f64 / SECONDS_PER_HOUR
    }
}
