//! Blackboard for one unit's engagement decision.
//!
//! A [`ManeuverContext`] is built per unit per tick. It holds the unit, the
//! hostiles around it (already filtered and split), the shared attack target,
//! and the collaborators the nodes consult. Exactly one node writes the
//! resulting [`Decision`].

use game_core::{
    CostGrid, HostileSnapshot, PathingOracle, Point, StanceController, TacticsConfig,
    TargetPriorityOracle, Unit, UnitAction, WeaponRangeOracle,
};

/// Which rung of the priority stack produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum ManeuverStep {
    /// Burrow or unburrow; suppresses combat this tick.
    Stance,
    ShootUnit,
    ShootStructure,
    /// Low-shield disengage to a safe spot.
    KeepSafe,
    /// Attack when ready, back off while reloading.
    Stutter,
    PathToTarget,
    AttackMove,
}

impl ManeuverStep {
    /// Steps that only fire with hostiles nearby.
    pub fn is_engagement(self) -> bool {
        matches!(
            self,
            ManeuverStep::ShootUnit
                | ManeuverStep::ShootStructure
                | ManeuverStep::KeepSafe
                | ManeuverStep::Stutter
        )
    }

    /// Steps taken only when no hostile is near.
    pub fn is_travel(self) -> bool {
        matches!(self, ManeuverStep::PathToTarget | ManeuverStep::AttackMove)
    }
}

/// The single command a unit receives this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub action: UnitAction,
    pub step: ManeuverStep,
}

/// Collaborators the engagement nodes consult.
#[derive(Clone, Copy)]
pub struct CombatOracles<'a> {
    pub priority: &'a dyn TargetPriorityOracle,
    pub weapon_range: &'a dyn WeaponRangeOracle,
    /// Without a planner the army attack-moves and retreats in straight lines.
    pub pathing: Option<&'a dyn PathingOracle>,
}

pub struct ManeuverContext<'a> {
    pub unit: &'a Unit,

    /// Hostiles within the proximity radius, minus memories and nuisances.
    pub hostiles: Vec<HostileSnapshot>,

    /// Non-structure subset of `hostiles`.
    pub enemy_units: Vec<HostileSnapshot>,

    pub enemy_structures: Vec<HostileSnapshot>,

    /// Enemy units within effective weapon range.
    pub units_in_range: Vec<HostileSnapshot>,

    pub structures_in_range: Vec<HostileSnapshot>,

    /// Attack point shared by every unit this tick.
    pub target: Point,

    pub grid: Option<&'a CostGrid>,

    pub oracles: CombatOracles<'a>,

    pub config: &'a TacticsConfig,

    /// Only the stance node writes here.
    pub stances: &'a mut StanceController,

    decision: Option<Decision>,
}

impl<'a> ManeuverContext<'a> {
    /// Filters `nearby` and precomputes the in-range sets.
    pub fn new(
        unit: &'a Unit,
        nearby: &[HostileSnapshot],
        target: Point,
        grid: Option<&'a CostGrid>,
        oracles: CombatOracles<'a>,
        config: &'a TacticsConfig,
        stances: &'a mut StanceController,
    ) -> Self {
        let radius = config.proximity_radius;
        let hostiles: Vec<HostileSnapshot> = nearby
            .iter()
            .filter(|h| h.is_engageable() && h.position.distance(unit.position) <= radius)
            .copied()
            .collect();
        let (enemy_structures, enemy_units): (Vec<_>, Vec<_>) =
            hostiles.iter().copied().partition(|h| h.is_structure);

        let units_in_range = oracles.weapon_range.in_weapon_range(unit, &enemy_units);
        let structures_in_range = oracles.weapon_range.in_weapon_range(unit, &enemy_structures);

        Self {
            unit,
            hostiles,
            enemy_units,
            enemy_structures,
            units_in_range,
            structures_in_range,
            target,
            grid,
            oracles,
            config,
            stances,
            decision: None,
        }
    }

    /// Records the decision. A second write is ignored and logged: the tree
    /// is a selector, so only one action node can succeed per evaluation.
    pub fn set_decision(&mut self, action: UnitAction, step: ManeuverStep) {
        if let Some(existing) = self.decision {
            tracing::warn!(
                tag = %self.unit.tag,
                kept = %existing.step,
                dropped = %step,
                "decision already set; ignoring"
            );
            return;
        }
        self.decision = Some(Decision { action, step });
    }

    pub fn has_decision(&self) -> bool {
        self.decision.is_some()
    }

    pub fn take_decision(self) -> Option<Decision> {
        self.decision
    }

    /// Focus target among every nearby hostile.
    pub fn focus_target(&self) -> Option<HostileSnapshot> {
        self.oracles.priority.pick(&self.hostiles)
    }
}
