//! Frame-by-frame replay of a scenario through a tactics session.

use std::collections::BTreeSet;

use anyhow::Result;
use game_content::{Frame, Scenario};
use game_core::{ArmyComposition, CostGrid, TacticsConfig, UnitTag};
use runtime::{CommandBuffer, OracleManager, SightVisibility, TacticsSession, TickInput, TickReport};
use tracing::{debug, info};

/// Totals over a whole replay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplaySummary {
    pub ticks: u64,
    pub commands: usize,
    pub production: usize,
    /// Iteration on which the activation gate opened.
    pub gate_opened_at: Option<u64>,
    /// Ticks on which micro was skipped for a missing collaborator.
    pub degraded_ticks: u64,
}

/// Drives a [`TacticsSession`] with scenario frames.
///
/// Unit creation and loss are inferred from frame-to-frame differences in
/// the friendly unit list.
pub struct Replay {
    session: TacticsSession,
    oracles: OracleManager,
    grid: Option<CostGrid>,
    known: BTreeSet<UnitTag>,
    iteration: u64,
}

impl Replay {
    pub fn new(
        config: TacticsConfig,
        scenario: &Scenario,
        composition: ArmyComposition,
    ) -> Result<Self> {
        let session = TacticsSession::with_composition(
            config,
            scenario.race,
            scenario.map.clone(),
            composition,
        )?;
        Ok(Self {
            session,
            oracles: OracleManager::default(),
            grid: scenario.cost_grid(),
            known: BTreeSet::new(),
            iteration: 0,
        })
    }

    pub fn session(&self) -> &TacticsSession {
        &self.session
    }

    /// Feeds one frame and returns the tick report with everything emitted.
    pub fn step(&mut self, frame: &Frame) -> (TickReport, CommandBuffer) {
        let units = frame.units();
        let alive: BTreeSet<UnitTag> = units.iter().map(|u| u.tag).collect();
        for &lost in self.known.difference(&alive) {
            self.session.on_unit_destroyed(lost);
        }
        for unit in units.iter().filter(|u| !self.known.contains(&u.tag)) {
            self.session.on_unit_created(unit);
        }
        self.known = alive;

        self.oracles.refresh(frame.hostiles(), self.grid.clone());
        self.oracles.visibility = if frame.reveal_all {
            SightVisibility::revealed()
        } else {
            SightVisibility::new(frame.sight.clone())
        };

        self.iteration += 1;
        let mut input = TickInput::new(self.iteration, frame.game_time);
        input.units = units;
        input.structures = frame.structures();
        input.enemy_structures = frame.enemy_structures.clone();
        input.mineral_fields = frame.mineral_fields();
        input.economy = frame.economy.clone();

        let mut sink = CommandBuffer::new();
        let report = self.session.tick(&input, &self.oracles.as_env(), &mut sink);
        (report, sink)
    }

    /// Replays every frame, logging each emitted command.
    pub fn run(mut self, frames: &[Frame]) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for frame in frames {
            let (report, sink) = self.step(frame);

            info!(
                tick = report.iteration,
                gate_open = report.gate_open,
                army_supply = report.army_supply,
                target = ?report.attack_target,
                "tick"
            );
            for (tag, action) in sink.actions() {
                info!(tick = report.iteration, %tag, ?action, "command");
            }
            for request in sink.production() {
                info!(tick = report.iteration, ?request, "production");
            }
            for (tag, step) in &report.maneuvers {
                debug!(%tag, %step, "maneuver");
            }

            summary.ticks += 1;
            summary.commands += sink.actions().len();
            summary.production += sink.production().len();
            if report.gate_opened {
                summary.gate_opened_at = Some(report.iteration);
            }
            if report.degraded.is_some() {
                summary.degraded_ticks += 1;
            }
        }
        summary
    }
}
