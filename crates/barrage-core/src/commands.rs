//! Operator commands sent from the frontend to the fire-direction engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Plotting ---
    /// Place the battery (firing) position on the map.
    SetBatteryPosition { position: Position },
    /// Place the target position on the map.
    SetTargetPosition { position: Position },

    // --- Ballistics ---
    /// Set the projectile muzzle velocity (m/s). Must be finite and
    /// positive; anything else is ignored.
    SetMuzzleVelocity { velocity: f64 },

    // --- TRP management ---
    /// Save the currently plotted pair under a name.
    SaveTrp { name: String },
    /// Recall a stored TRP by its list index, repopulating both positions.
    RecallTrp { index: usize },
}
