//! Fire-direction engine — the core of the calculator.
//!
//! `FdcEngine` owns the working state, processes operator commands at tick
//! boundaries, and produces `FdcSnapshot`s. The map/UI frontend drives it
//! once per rendered frame and renders whatever the snapshot says.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use barrage_core::ballistics::FiringSolution;
use barrage_core::commands::OperatorCommand;
use barrage_core::constants::{DEFAULT_MUZZLE_VELOCITY, STANDARD_GRAVITY};
use barrage_core::events::FdcEvent;
use barrage_core::registry::TrpRegistry;
use barrage_core::state::{FdcSnapshot, TrpView};
use barrage_core::types::Position;

/// Configuration for starting a new engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdcConfig {
    /// Initial muzzle velocity (m/s).
    pub muzzle_velocity: f64,
    /// Gravity constant (m/s²). Not operator-editable.
    pub gravity: f64,
}

impl Default for FdcConfig {
    fn default() -> Self {
        Self {
            muzzle_velocity: DEFAULT_MUZZLE_VELOCITY,
            gravity: STANDARD_GRAVITY,
        }
    }
}

/// The fire-direction engine. Owns all working state.
pub struct FdcEngine {
    battery: Option<Position>,
    target: Option<Position>,
    muzzle_velocity: f64,
    gravity: f64,
    registry: TrpRegistry,
    command_queue: VecDeque<OperatorCommand>,
    events: Vec<FdcEvent>,
}

impl FdcEngine {
    /// Create a new engine with the given config. No positions are plotted
    /// yet, so the first snapshots carry no solution.
    pub fn new(config: FdcConfig) -> Self {
        Self {
            battery: None,
            target: None,
            muzzle_velocity: config.muzzle_velocity,
            gravity: config.gravity,
            registry: TrpRegistry::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, recompute the solution, and return the
    /// resulting snapshot. The solution is evaluated from scratch each call;
    /// nothing is cached between frames.
    pub fn tick(&mut self) -> FdcSnapshot {
        self.process_commands();
        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Get the plotted battery position.
    pub fn battery(&self) -> Option<Position> {
        self.battery
    }

    /// Get the plotted target position.
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Get the current muzzle velocity.
    pub fn muzzle_velocity(&self) -> f64 {
        self.muzzle_velocity
    }

    /// Get a read-only reference to the TRP registry.
    pub fn registry(&self) -> &TrpRegistry {
        &self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SetBatteryPosition { position } => {
                self.battery = Some(position);
            }
            OperatorCommand::SetTargetPosition { position } => {
                self.target = Some(position);
            }
            OperatorCommand::SetMuzzleVelocity { velocity } => {
                if velocity.is_finite() && velocity > 0.0 {
                    self.muzzle_velocity = velocity;
                } else {
                    log::warn!("ignoring muzzle velocity {velocity}; must be finite and positive");
                }
            }
            OperatorCommand::SaveTrp { name } => self.save_trp(&name),
            OperatorCommand::RecallTrp { index } => {
                if index < self.registry.len() {
                    let (origin, target) = self.registry.select(index);
                    self.battery = Some(origin);
                    self.target = Some(target);
                } else {
                    log::warn!(
                        "ignoring recall of TRP index {index}; {} stored",
                        self.registry.len()
                    );
                }
            }
        }
    }

    /// Save the currently plotted pair as a TRP, emitting the outcome as an
    /// event. Requires both positions; the registry itself enforces the
    /// non-empty name.
    fn save_trp(&mut self, name: &str) {
        let (origin, target) = match (self.battery, self.target) {
            (Some(origin), Some(target)) => (origin, target),
            _ => {
                log::warn!("TRP save rejected: battery and target must both be plotted");
                self.events.push(FdcEvent::TrpSaveRejected {
                    reason: "battery and target must both be plotted".to_string(),
                });
                return;
            }
        };

        match self.registry.save(name, origin, target) {
            Ok(trp) => {
                let name = trp.name.clone();
                log::debug!("saved TRP {name}");
                self.events.push(FdcEvent::TrpSaved { name });
            }
            Err(err) => {
                log::warn!("TRP save rejected: {err}");
                self.events.push(FdcEvent::TrpSaveRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Build the display snapshot from current state.
    fn build_snapshot(&self, events: Vec<FdcEvent>) -> FdcSnapshot {
        let solution = match (self.battery, self.target) {
            (Some(battery), Some(target)) => Some(FiringSolution::compute(
                battery,
                target,
                self.muzzle_velocity,
                self.gravity,
            )),
            _ => None,
        };

        let trps = self
            .registry
            .list()
            .iter()
            .map(|trp| TrpView {
                name: trp.name.clone(),
                origin: trp.origin,
                target: trp.target,
            })
            .collect();

        FdcSnapshot {
            battery: self.battery,
            target: self.target,
            muzzle_velocity: self.muzzle_velocity,
            solution,
            trps,
            events,
        }
    }
}
