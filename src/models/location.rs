use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single geolocation reading: where the device was and when the
/// reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub acquired_at: DateTime<Local>,
}

impl LocationFix {
    pub fn new(latitude: f64, longitude: f64, acquired_at: DateTime<Local>) -> Self {
        Self {
            latitude,
            longitude,
            acquired_at,
        }
    }

    /// Short human-readable form used in CLI output, e.g. "12.91000, 77.61000".
    pub fn coords_str(&self) -> String {
        format!("{:.5}, {:.5}", self.latitude, self.longitude)
    }
}
