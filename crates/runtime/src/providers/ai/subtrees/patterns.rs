//! Layer 1: small condition-action pairs.

use behavior_tree::Node;
use behavior_tree::builder::{branch, guard, node, selector};

use crate::providers::ai::ManeuverContext;
use crate::providers::ai::nodes::{
    AttackMove, KeepUnitSafe, PathUnitToTarget, RangeSet, ShieldLow, ShootTargetInRange,
    StructuresInRange, StutterUnitBack, UnitsInRange,
};

/// Fire on an enemy unit in range.
pub fn shoot_units_in_range<'n, 'a: 'n>() -> Node<'n, ManeuverContext<'a>> {
    guard(
        node(UnitsInRange),
        node(ShootTargetInRange {
            set: RangeSet::Units,
        }),
    )
}

/// Fire on a structure in range, only when no enemy unit is.
pub fn shoot_structures_in_range<'n, 'a: 'n>() -> Node<'n, ManeuverContext<'a>> {
    guard(
        node(StructuresInRange),
        node(ShootTargetInRange {
            set: RangeSet::Structures,
        }),
    )
}

/// Disengage on low shields, otherwise stutter-step on the focus target.
pub fn retreat_or_stutter<'n, 'a: 'n>() -> Node<'n, ManeuverContext<'a>> {
    branch(node(ShieldLow), node(KeepUnitSafe), node(StutterUnitBack))
}

/// Path along the cost field, attack-moving when that fails.
pub fn travel_to_target<'n, 'a: 'n>() -> Node<'n, ManeuverContext<'a>> {
    selector(vec![node(PathUnitToTarget), node(AttackMove)])
}
