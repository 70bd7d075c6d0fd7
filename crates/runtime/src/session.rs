//! Tick orchestration.
//!
//! [`TacticsSession`] owns every piece of state that outlives a tick and
//! gives each exactly one writer:
//!
//! - current base target and expansion cursor: [`TargetSelector`]
//! - stance records: [`StanceController`], written only by the stance node
//! - attack latch: [`ActivationGate`]
//! - roles: the session's [`RoleStore`], written on unit creation and loss
use std::collections::HashMap;

use game_core::{
    ActivationGate, ArmyComposition, Capabilities, CommandSink, GameError, HostileSnapshot,
    MapInfo, OracleError, Point, QueryScope, Race, RoleError, RoleStore, SpatialOracle,
    StanceController, TacticsConfig, TacticsEnv, TargetSelector, TargetingView, Unit, UnitRole,
    UnitTag,
};
use tracing::{debug, debug_span, info, warn};

use crate::api::{Result, TickInput, TickReport};
use crate::providers::ai::{CombatOracles, decide_action};
use crate::providers::{MacroTasks, ProductionAllocator};
use crate::repository::RoleTable;

pub struct TacticsSession {
    config: TacticsConfig,
    race: Race,
    player_start: Point,
    targets: TargetSelector,
    stances: StanceController,
    gate: ActivationGate,
    roles: Box<dyn RoleStore>,
    production: ProductionAllocator,
    macro_tasks: MacroTasks,
}

impl TacticsSession {
    /// Builds a session with the race's default army composition.
    ///
    /// # Errors
    ///
    /// Fails when the config is invalid or the map has no expansion sites.
    pub fn new(config: TacticsConfig, race: Race, map: MapInfo) -> Result<Self> {
        Self::with_composition(config, race, map, ArmyComposition::default_for(race))
    }

    /// # Errors
    ///
    /// Fails when the config or composition is invalid or the map has no
    /// expansion sites.
    pub fn with_composition(
        config: TacticsConfig,
        race: Race,
        map: MapInfo,
        composition: ArmyComposition,
    ) -> Result<Self> {
        config.validate()?;
        let targets = TargetSelector::new(map.expansions, &map.enemy_starts, config.early_game_secs)?;
        let production = ProductionAllocator::new(composition, config.supply_buffer)?;
        let gate = ActivationGate::new(config.attack_supply_threshold(race));
        let stances = StanceController::new(config.burrow_at_health, config.unburrow_at_health);

        info!(
            %race,
            attack_supply = gate.threshold(),
            base_target = %targets.current_base_target(),
            "tactics session ready"
        );

        Ok(Self {
            config,
            race,
            player_start: map.player_start,
            targets,
            stances,
            gate,
            roles: Box::new(RoleTable::new()),
            production,
            macro_tasks: MacroTasks::new(),
        })
    }

    /// Swaps in an external role registry. Call before any unit is created.
    pub fn with_role_store(mut self, roles: Box<dyn RoleStore>) -> Self {
        self.roles = roles;
        self
    }

    pub fn config(&self) -> &TacticsConfig {
        &self.config
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn gate(&self) -> &ActivationGate {
        &self.gate
    }

    pub fn targets(&self) -> &TargetSelector {
        &self.targets
    }

    pub fn stances(&self) -> &StanceController {
        &self.stances
    }

    pub fn roles(&self) -> &dyn RoleStore {
        self.roles.as_ref()
    }

    /// Tags every combat-eligible unit as attacking, once.
    ///
    /// Returns the role assigned by this call; `None` for exempt units and
    /// for units that already hold a role.
    pub fn on_unit_created(&mut self, unit: &Unit) -> Option<UnitRole> {
        if !unit.is_combat_eligible() {
            debug!(tag = %unit.tag, unit_type = %unit.unit_type, "exempt from roles");
            return None;
        }
        match self.roles.assign(unit.tag, UnitRole::Attacking) {
            Ok(()) => {
                debug!(tag = %unit.tag, unit_type = %unit.unit_type, "assigned attacking");
                Some(UnitRole::Attacking)
            }
            Err(err @ RoleError::AlreadyAssigned { .. }) => {
                warn!(error = %err, code = err.error_code(), "duplicate unit creation");
                None
            }
        }
    }

    /// Drops every record held for a lost unit.
    pub fn on_unit_destroyed(&mut self, tag: UnitTag) {
        let role = self.roles.release(tag);
        self.stances.forget(tag);
        debug!(%tag, ?role, "unit lost");
    }

    /// Runs one decision step. Never fails: missing collaborators degrade
    /// the tick and are reported in the [`TickReport`].
    pub fn tick(
        &mut self,
        input: &TickInput,
        env: &TacticsEnv<'_>,
        sink: &mut dyn CommandSink,
    ) -> TickReport {
        let span = debug_span!("tick", iteration = input.iteration, game_time = input.game_time);
        let _guard = span.enter();

        let mut report = TickReport::new(input.iteration);

        if self.config.macro_tasks {
            report.macro_commands = self.macro_tasks.run(input, sink);
        }

        let alive: HashMap<UnitTag, &Unit> = input.units.iter().map(|u| (u.tag, u)).collect();
        let forces: Vec<&Unit> = self
            .roles
            .units_with_role(UnitRole::Attacking)
            .into_iter()
            .filter_map(|tag| alive.get(&tag).copied())
            .collect();
        report.army_supply = forces.iter().map(|u| u.supply_cost).sum();

        report.production = self
            .production
            .plan(&input.economy, forces.iter().copied(), self.player_start);
        for request in &report.production {
            sink.request_production(*request);
        }

        if self.gate.is_open() {
            if let Err(err) = self.micro(input, env, &forces, sink, &mut report) {
                warn!(error = %err, code = err.error_code(), "micro skipped");
                report.degraded = Some(err);
            }
        } else {
            report.gate_opened = self.gate.observe(report.army_supply);
        }
        report.gate_open = self.gate.is_open();
        report
    }

    fn micro(
        &mut self,
        input: &TickInput,
        env: &TacticsEnv<'_>,
        forces: &[&Unit],
        sink: &mut dyn CommandSink,
        report: &mut TickReport,
    ) -> std::result::Result<(), OracleError> {
        let spatial = env.spatial()?;
        let visibility = env.visibility()?;
        let oracles = CombatOracles {
            priority: env.priority()?,
            weapon_range: env.weapon_range()?,
            pathing: env.pathing().ok(),
        };

        let view = TargetingView {
            player_start: self.player_start,
            enemy_structures: &input.enemy_structures,
            game_time: input.game_time,
        };
        let target = self.targets.compute_attack_target(&view, visibility);
        report.attack_target = Some(target);

        let grid = spatial.cost_field();
        if grid.is_none() {
            warn!("no cost field this tick; travel falls back to attack-move");
        }

        let nearby = self.query_hostiles(spatial, forces);
        for &unit in forces {
            let hostiles = nearby.get(&unit.tag).map(Vec::as_slice).unwrap_or_default();
            let decision = decide_action(
                unit,
                hostiles,
                target,
                grid,
                oracles,
                &self.config,
                &mut self.stances,
            );
            sink.submit(unit.tag, decision.action);
            report.maneuvers.push((unit.tag, decision.step));
        }
        Ok(())
    }

    /// One batched query per scope: ground-only units only see ground enemies.
    fn query_hostiles(
        &self,
        spatial: &dyn SpatialOracle,
        forces: &[&Unit],
    ) -> HashMap<UnitTag, Vec<HostileSnapshot>> {
        let (ground, any): (Vec<_>, Vec<_>) = forces
            .iter()
            .map(|u| (u.tag, u.position, u.can(Capabilities::GROUND_ONLY)))
            .partition(|&(_, _, ground_only)| ground_only);

        let radius = self.config.proximity_radius;
        let mut nearby = HashMap::with_capacity(forces.len());
        for (points, scope) in [(ground, QueryScope::EnemyGround), (any, QueryScope::AllEnemy)] {
            if points.is_empty() {
                continue;
            }
            let points: Vec<(UnitTag, Point)> = points.into_iter().map(|(t, p, _)| (t, p)).collect();
            nearby.extend(spatial.nearby_hostiles(&points, radius, scope));
        }
        nearby
    }
}
