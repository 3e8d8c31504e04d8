//! Fire-direction engine for BARRAGE.
//!
//! Owns the operator's working state (plotted positions, muzzle velocity,
//! saved TRPs), processes queued commands, and produces `FdcSnapshot`s for
//! the frontend each frame. Completely headless (no UI dependency),
//! enabling deterministic testing.

pub mod engine;

pub use barrage_core as core;
pub use engine::{FdcConfig, FdcEngine};
