use std::collections::HashMap;

use tracing::debug;

use crate::action::AbilityId;
use crate::state::{Stance, UnitTag};

/// A stance flip the controller wants issued this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StanceChange {
    pub from: Stance,
    pub to: Stance,
}

impl StanceChange {
    pub fn ability(self) -> AbilityId {
        match self.to {
            Stance::Burrowed => AbilityId::BurrowDown,
            Stance::Surfaced => AbilityId::BurrowUp,
        }
    }
}

/// Health-driven burrow state machine with hysteresis.
///
/// Surfaced units burrow at or below `burrow_at`; burrowed units surface
/// strictly above `unburrow_at`. Between the two nothing changes, so a unit
/// healing from 0.2 to 0.8 stays burrowed and cannot flicker.
#[derive(Clone, Debug)]
pub struct StanceController {
    stances: HashMap<UnitTag, Stance>,
    burrow_at: f32,
    unburrow_at: f32,
}

impl StanceController {
    pub fn new(burrow_at: f32, unburrow_at: f32) -> Self {
        Self {
            stances: HashMap::new(),
            burrow_at,
            unburrow_at,
        }
    }

    pub fn stance_of(&self, tag: UnitTag) -> Stance {
        self.stances.get(&tag).copied().unwrap_or_default()
    }

    /// Evaluates one unit and records the stance it will be in.
    ///
    /// `reported` is the stance the engine observed; it wins over our own
    /// record so a command the engine dropped is retried next tick.
    pub fn update(&mut self, tag: UnitTag, health: f32, reported: Stance) -> Option<StanceChange> {
        let to = match reported {
            Stance::Surfaced if health <= self.burrow_at => Stance::Burrowed,
            Stance::Burrowed if health > self.unburrow_at => Stance::Surfaced,
            current => {
                self.stances.insert(tag, current);
                return None;
            }
        };

        self.stances.insert(tag, to);
        let change = StanceChange { from: reported, to };
        debug!(%tag, health, to = ?change.to, "stance change");
        Some(change)
    }

    /// Drops the record of a lost unit.
    pub fn forget(&mut self, tag: UnitTag) {
        self.stances.remove(&tag);
    }

    pub fn len(&self) -> usize {
        self.stances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stances.is_empty()
    }
}
