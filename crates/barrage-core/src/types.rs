//! Fundamental geometric types.

use serde::{Deserialize, Serialize};

/// 2D position on the map plane (meters, Cartesian).
/// x = East, y = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in meters.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }

    /// Bearing to another position in degrees, measured from +y (North)
    /// toward +x (East). Left in the raw `atan2` range of roughly
    /// -180..180 rather than normalized to 0-360. Returns 0 when both
    /// positions coincide.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).to_degrees()
    }
}
