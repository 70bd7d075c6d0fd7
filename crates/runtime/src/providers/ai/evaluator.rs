//! Per-unit entry point into the engagement tree.
use behavior_tree::Behavior;
use game_core::{
    CostGrid, HostileSnapshot, Point, StanceController, TacticsConfig, Unit, UnitAction,
};
use tracing::debug;

use super::{CombatOracles, Decision, ManeuverContext, ManeuverStep, subtrees};

/// Decides one unit's command for this tick.
///
/// Always yields a command: the travel branch ends in an unconditional
/// attack-move.
#[allow(clippy::too_many_arguments)]
pub fn decide_action(
    unit: &Unit,
    nearby: &[HostileSnapshot],
    target: Point,
    grid: Option<&CostGrid>,
    oracles: CombatOracles<'_>,
    config: &TacticsConfig,
    stances: &mut StanceController,
) -> Decision {
    let tree = subtrees::engagement();
    let mut ctx = ManeuverContext::new(unit, nearby, target, grid, oracles, config, stances);
    tree.tick(&mut ctx);

    let decision = ctx.take_decision().unwrap_or(Decision {
        action: UnitAction::AttackMove {
            destination: target,
        },
        step: ManeuverStep::AttackMove,
    });
    debug!(tag = %unit.tag, step = %decision.step, action = ?decision.action, "maneuver");
    decision
}
