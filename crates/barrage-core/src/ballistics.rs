//! Flat-ground projectile solver: closed-form inversion of the range
//! equation into barrel elevation and time of flight.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// The two launch-angle solutions that reach the same distance.
///
/// Note the root assignment: `Low` takes the `+sqrt` branch of the range
/// inversion and `High` the `-sqrt` branch, so under this labelling the
/// "low" profile is the steeper trajectory. Kept as-is for compatibility
/// with the fielded calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcProfile {
    #[default]
    Low,
    High,
}

/// Barrel elevation in degrees for a projectile fired at `velocity` (m/s)
/// to land `distance` meters away under constant `gravity`.
///
/// Returns 0 when the target is beyond maximum range for the given
/// velocity (negative discriminant) and for zero distance. The zero is a
/// sentinel, indistinguishable from a genuine flat shot; callers that need
/// to tell the two apart must check range feasibility themselves.
pub fn elevation_angle(distance: f64, velocity: f64, gravity: f64, arc: ArcProfile) -> f64 {
    if distance == 0.0 {
        return 0.0;
    }
    let v2 = velocity * velocity;
    let discriminant = v2 * v2 - gravity * gravity * distance * distance;
    if discriminant < 0.0 {
        return 0.0;
    }
    let numerator = match arc {
        ArcProfile::Low => v2 + discriminant.sqrt(),
        ArcProfile::High => v2 - discriminant.sqrt(),
    };
    (numerator / (gravity * distance)).atan().to_degrees()
}

/// Time of flight in seconds to cover `distance` at `velocity` with the
/// barrel raised to `elevation_deg`.
///
/// A vertical shot (cos = 0) is guarded and reported as unbounded rather
/// than left to produce a platform-dependent division result.
pub fn time_of_flight(distance: f64, velocity: f64, elevation_deg: f64) -> f64 {
    let cos = elevation_deg.to_radians().cos();
    if cos.abs() < f64::EPSILON {
        return f64::INFINITY;
    }
    distance / (velocity * cos)
}

/// Complete firing solution for one battery/target pair, recomputed from
/// scratch every evaluation cycle. All fields are display-ready scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FiringSolution {
    /// Battery-to-target distance (meters).
    pub distance: f64,
    /// Bearing from battery to target (degrees, raw atan2 range).
    pub bearing: f64,
    /// Barrel elevation for the low-arc profile (degrees).
    pub elevation_low: f64,
    /// Barrel elevation for the high-arc profile (degrees).
    pub elevation_high: f64,
    /// Time of flight on the low-arc profile (seconds).
    pub time_of_flight_low: f64,
    /// Time of flight on the high-arc profile (seconds).
    pub time_of_flight_high: f64,
}

impl FiringSolution {
    /// Evaluate the full solution for firing from `battery` at `target`.
    pub fn compute(battery: Position, target: Position, velocity: f64, gravity: f64) -> Self {
        let distance = battery.distance_to(&target);
        let bearing = battery.bearing_to(&target);
        let elevation_low = elevation_angle(distance, velocity, gravity, ArcProfile::Low);
        let elevation_high = elevation_angle(distance, velocity, gravity, ArcProfile::High);
        Self {
            distance,
            bearing,
            elevation_low,
            elevation_high,
            time_of_flight_low: time_of_flight(distance, velocity, elevation_low),
            time_of_flight_high: time_of_flight(distance, velocity, elevation_high),
        }
    }
}
