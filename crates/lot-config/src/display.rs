//! Output presentation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Render timestamps in UTC instead of the local time zone.
    #[serde(default)]
    pub utc: bool,
}
