//! Commands the core emits.
//!
//! A [`UnitAction`] is addressed to one controlled unit; a
//! [`ProductionRequest`] goes to the external production queue. Neither is
//! executed here: they are handed to a [`crate::CommandSink`].
use crate::state::{Point, UnitTag, UnitTypeId};

/// Ability a unit or structure can cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityId {
    BurrowDown,
    BurrowUp,
    ChronoBoost,
    CalldownMule,
    LowerSupplyDepot,
    InjectLarva,
}

/// Research the core may start on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeId {
    Burrow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityTarget {
    None,
    Unit(UnitTag),
    Point(Point),
}

/// One command for one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitAction {
    /// Fire on a specific hostile.
    Attack { target: UnitTag },
    /// Move, engaging anything met on the way.
    AttackMove { destination: Point },
    /// Move without engaging.
    Move { destination: Point },
    /// Follow the cost field: `waypoint` is the next step toward `destination`.
    Path { waypoint: Point, destination: Point },
    UseAbility {
        ability: AbilityId,
        target: AbilityTarget,
    },
    Research { upgrade: UpgradeId },
}

impl UnitAction {
    pub fn ability(ability: AbilityId) -> Self {
        UnitAction::UseAbility {
            ability,
            target: AbilityTarget::None,
        }
    }

    pub fn ability_on_unit(ability: AbilityId, target: UnitTag) -> Self {
        UnitAction::UseAbility {
            ability,
            target: AbilityTarget::Unit(target),
        }
    }

    pub fn ability_at(ability: AbilityId, target: Point) -> Self {
        UnitAction::UseAbility {
            ability,
            target: AbilityTarget::Point(target),
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, UnitAction::Attack { .. })
    }
}

/// Request handed to the external production queue.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProductionRequest {
    Train { unit_type: UnitTypeId, count: u32 },
    /// One more supply provider, placed near `near`.
    Supply { near: Point },
}
