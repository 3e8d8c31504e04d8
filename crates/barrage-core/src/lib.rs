//! Core types and definitions for the BARRAGE fire-direction calculator.
//!
//! This crate defines the vocabulary shared across the workspace: geometric
//! types, the ballistics solver, the TRP registry, operator commands, state
//! snapshots, events, and constants. It has no dependency on any UI or
//! rendering framework.

pub mod ballistics;
pub mod commands;
pub mod constants;
pub mod events;
pub mod registry;
pub mod state;
pub mod types;
