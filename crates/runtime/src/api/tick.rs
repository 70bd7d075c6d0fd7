//! Per-tick input and output of a [`crate::TacticsSession`].
use game_core::{
    EconomySnapshot, MineralField, OracleError, OwnStructure, Point, ProductionRequest, Unit,
    UnitTag,
};

use crate::providers::ai::ManeuverStep;

/// Everything the engine reports for one tick.
#[derive(Clone, Debug, Default)]
pub struct TickInput {
    pub iteration: u64,
    /// Elapsed game seconds.
    pub game_time: f32,
    /// Every friendly unit currently alive, workers included.
    pub units: Vec<Unit>,
    pub structures: Vec<OwnStructure>,
    /// Positions of enemy structures currently visible.
    pub enemy_structures: Vec<Point>,
    pub mineral_fields: Vec<MineralField>,
    pub economy: EconomySnapshot,
}

impl TickInput {
    pub fn new(iteration: u64, game_time: f32) -> Self {
        Self {
            iteration,
            game_time,
            ..Default::default()
        }
    }

    pub fn unit(&self, tag: UnitTag) -> Option<&Unit> {
        self.units.iter().find(|u| u.tag == tag)
    }
}

/// What a tick decided, for logging and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub iteration: u64,
    /// `None` while the activation gate is closed.
    pub attack_target: Option<Point>,
    pub gate_open: bool,
    /// The gate opened during this tick; micro starts on the next one.
    pub gate_opened: bool,
    /// Army supply counted toward the gate.
    pub army_supply: f32,
    /// Priority-stack step chosen for each engaged unit, in tag order.
    pub maneuvers: Vec<(UnitTag, ManeuverStep)>,
    pub production: Vec<ProductionRequest>,
    pub macro_commands: usize,
    /// A required collaborator was missing and micro was skipped.
    pub degraded: Option<OracleError>,
}

impl TickReport {
    pub fn new(iteration: u64) -> Self {
        Self {
            iteration,
            ..Default::default()
        }
    }

    pub fn step_of(&self, tag: UnitTag) -> Option<ManeuverStep> {
        self.maneuvers
            .iter()
            .find_map(|(t, step)| (*t == tag).then_some(*step))
    }
}
