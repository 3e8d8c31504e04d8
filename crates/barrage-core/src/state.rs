//! Engine state snapshot — the complete visible state sent to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::ballistics::FiringSolution;
use crate::events::FdcEvent;
use crate::types::Position;

/// Complete fire-direction state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FdcSnapshot {
    /// Battery position, if the operator has plotted one.
    pub battery: Option<Position>,
    /// Target position, if the operator has plotted one.
    pub target: Option<Position>,
    /// Current muzzle velocity (m/s).
    pub muzzle_velocity: f64,
    /// Firing solution; present only once both positions are plotted.
    pub solution: Option<FiringSolution>,
    /// Saved TRPs in creation order (also the display order).
    pub trps: Vec<TrpView>,
    /// Events raised since the previous tick.
    pub events: Vec<FdcEvent>,
}

/// A saved TRP as shown in the recall menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrpView {
    pub name: String,
    pub origin: Position,
    pub target: Position,
}
