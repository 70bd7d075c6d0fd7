//! Action nodes for the engagement tree.
//!
//! Each node either records one [`Decision`](crate::providers::ai::Decision)
//! and succeeds, or leaves the context untouched and fails.

use behavior_tree::{Behavior, Status};
use game_core::{Capabilities, Point, UnitAction};
use tracing::debug;

use crate::providers::ai::{ManeuverContext, ManeuverStep};

/// Runs the stance controller for burrow-capable units and issues the
/// burrow or unburrow command when it asks for one.
pub struct StanceOverride;

impl Behavior<ManeuverContext<'_>> for StanceOverride {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        if !ctx.unit.can(Capabilities::BURROW) {
            return Status::Failure;
        }
        let unit = ctx.unit;
        match ctx
            .stances
            .update(unit.tag, unit.health_percentage, unit.stance)
        {
            Some(change) => {
                ctx.set_decision(UnitAction::ability(change.ability()), ManeuverStep::Stance);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Which in-range set [`ShootTargetInRange`] fires on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeSet {
    Units,
    Structures,
}

/// Fires on the priority target among hostiles already in weapon range.
pub struct ShootTargetInRange {
    pub set: RangeSet,
}

impl Behavior<ManeuverContext<'_>> for ShootTargetInRange {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        let (candidates, step) = match self.set {
            RangeSet::Units => (&ctx.units_in_range, ManeuverStep::ShootUnit),
            RangeSet::Structures => (&ctx.structures_in_range, ManeuverStep::ShootStructure),
        };
        let Some(target) = ctx.oracles.priority.pick(candidates) else {
            return Status::Failure;
        };
        ctx.set_decision(UnitAction::Attack { target: target.tag }, step);
        Status::Success
    }
}

/// Moves to the cheapest nearby spot on the cost field, or straight away
/// from the focus target when no field or planner is available.
pub struct KeepUnitSafe;

impl Behavior<ManeuverContext<'_>> for KeepUnitSafe {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        let Some(focus) = ctx.focus_target() else {
            return Status::Failure;
        };
        let radius = ctx.config.safe_spot_radius;
        let destination = retreat_point(ctx, focus.position, radius);
        ctx.set_decision(UnitAction::Move { destination }, ManeuverStep::KeepSafe);
        Status::Success
    }
}

/// Attacks the focus target when the weapon is ready and steps back toward
/// safety while it cools down.
pub struct StutterUnitBack;

impl Behavior<ManeuverContext<'_>> for StutterUnitBack {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        let Some(focus) = ctx.focus_target() else {
            return Status::Failure;
        };
        let action = if ctx.unit.weapon_ready {
            UnitAction::Attack { target: focus.tag }
        } else {
            let destination = retreat_point(ctx, focus.position, ctx.config.stutter_distance);
            UnitAction::Move { destination }
        };
        ctx.set_decision(action, ManeuverStep::Stutter);
        Status::Success
    }
}

/// Follows the cost field toward the shared target. Fails when there is no
/// field, no planner, or no progress to be made.
pub struct PathUnitToTarget;

impl Behavior<ManeuverContext<'_>> for PathUnitToTarget {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        let (Some(grid), Some(pathing)) = (ctx.grid, ctx.oracles.pathing) else {
            return Status::Failure;
        };
        let destination = ctx.target;
        match pathing.next_waypoint(grid, ctx.unit.position, destination) {
            Some(waypoint) => {
                ctx.set_decision(
                    UnitAction::Path {
                        waypoint,
                        destination,
                    },
                    ManeuverStep::PathToTarget,
                );
                Status::Success
            }
            None => {
                debug!(tag = %ctx.unit.tag, %destination, "no path; falling back to attack-move");
                Status::Failure
            }
        }
    }
}

/// Direct attack-move to the shared target. Always succeeds.
pub struct AttackMove;

impl Behavior<ManeuverContext<'_>> for AttackMove {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        ctx.set_decision(
            UnitAction::AttackMove {
                destination: ctx.target,
            },
            ManeuverStep::AttackMove,
        );
        Status::Success
    }
}

fn retreat_point(ctx: &ManeuverContext<'_>, threat: Point, radius: f32) -> Point {
    let from = ctx.unit.position;
    ctx.grid
        .zip(ctx.oracles.pathing)
        .and_then(|(grid, pathing)| pathing.safe_spot(grid, from, radius))
        .unwrap_or_else(|| from.away_from(threat, radius))
}
