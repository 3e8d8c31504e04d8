//! Events emitted by the engine for frontend feedback.

use serde::{Deserialize, Serialize};

/// Outcome notifications for operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FdcEvent {
    /// A TRP was stored under the given name.
    TrpSaved { name: String },
    /// A save request was refused; the registry is unchanged.
    TrpSaveRejected { reason: String },
}
