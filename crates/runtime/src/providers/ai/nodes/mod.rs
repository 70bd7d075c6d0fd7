//! Behavior tree nodes for unit engagement.
//!
//! - **Conditions** check the context without side effects
//! - **Actions** record the unit's decision
mod actions;
mod conditions;

pub use actions::{
    AttackMove, KeepUnitSafe, PathUnitToTarget, RangeSet, ShootTargetInRange, StanceOverride,
    StutterUnitBack,
};
pub use conditions::{HasHostiles, ShieldLow, StructuresInRange, UnitsInRange};
