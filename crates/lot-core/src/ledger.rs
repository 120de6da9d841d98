//! The arrival-ordered ledger of parked cars.
//!
//! ```text
//! admit  → push_back   (space id = rear id + 1, or 1 when empty)
//! release → pop_front  (oldest arrival is always the one billed)
//! ```
//!
//! There is no capacity check and no way to release a particular space.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::entities::{Bill, OccupancyRecord};
use crate::tariff::Tariff;

#[derive(Debug, Default)]
pub struct ParkingLedger {
    records: VecDeque<OccupancyRecord>,
}

impl ParkingLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Parked cars, oldest arrival first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &OccupancyRecord> {
        self.records.iter()
    }

    /// The car that the next [`release`](Self::release) would bill.
    #[must_use]
    pub fn peek_front(&self) -> Option<&OccupancyRecord> {
        self.records.front()
    }

    /// Space id the next admission will receive.
    #[must_use]
    pub fn next_space_id(&self) -> u32 {
        self.records
            .back()
            .map_or(1, |rear| rear.space_id.saturating_add(1))
    }

    /// Park a car at `parked_at` and return its space id.
    pub fn admit(
        &mut self,
        owner_name: impl Into<String>,
        plate_number: impl Into<String>,
        parked_at: DateTime<Utc>,
    ) -> u32 {
        let space_id = self.next_space_id();
        let record = OccupancyRecord {
            space_id,
            owner_name: owner_name.into(),
            plate_number: plate_number.into(),
            parked_at,
        };
        tracing::debug!(space_id, plate = %record.plate_number, "ledger: admitted");
        self.records.push_back(record);
        space_id
    }

    /// Remove the longest-parked car and bill its stay up to `left_at`.
    ///
    /// Returns `None` and leaves the ledger untouched when no car is parked.
    pub fn release(&mut self, left_at: DateTime<Utc>, tariff: &Tariff) -> Option<Bill> {
        let record = self.records.pop_front()?;
        let bill = Bill::compute(&record, left_at, tariff);
        tracing::debug!(
            space_id = bill.space_id,
            plate = %bill.plate_number,
            duration_secs = bill.duration_secs,
            fee = bill.fee,
            "ledger: released"
        );
        Some(bill)
    }
}
