//! Condition nodes for the engagement tree.
//!
//! Condition nodes read the context and return Success or Failure.
//! They never record a decision.

use behavior_tree::{Behavior, Status};
use game_core::Capabilities;

use crate::providers::ai::ManeuverContext;

/// Any filtered hostile within the proximity radius.
pub struct HasHostiles;

impl Behavior<ManeuverContext<'_>> for HasHostiles {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        Status::from_bool(!ctx.hostiles.is_empty())
    }
}

/// Weapon ready with at least one enemy unit in effective range.
pub struct UnitsInRange;

impl Behavior<ManeuverContext<'_>> for UnitsInRange {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        Status::from_bool(ctx.unit.weapon_ready && !ctx.units_in_range.is_empty())
    }
}

/// Weapon ready with a structure in range and no enemy unit in range.
pub struct StructuresInRange;

impl Behavior<ManeuverContext<'_>> for StructuresInRange {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        Status::from_bool(
            ctx.unit.weapon_ready
                && ctx.units_in_range.is_empty()
                && !ctx.structures_in_range.is_empty(),
        )
    }
}

/// Shield-retreat unit whose shields are below the retreat threshold.
pub struct ShieldLow;

impl Behavior<ManeuverContext<'_>> for ShieldLow {
    fn tick(&self, ctx: &mut ManeuverContext<'_>) -> Status {
        Status::from_bool(
            ctx.unit.can(Capabilities::SHIELD_RETREAT)
                && ctx.unit.shield_percentage < ctx.config.shield_retreat_below,
        )
    }
}
