use chrono::{DateTime, Utc};

/// A car currently parked in the lot.
///
/// Created on admission and dropped once the car has been billed on release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyRecord {
    pub space_id: u32,
    pub owner_name: String,
    pub plate_number: String,
    pub parked_at: DateTime<Utc>,
}
