mod bill;
mod occupancy;

pub use bill::Bill;
pub use occupancy::OccupancyRecord;
