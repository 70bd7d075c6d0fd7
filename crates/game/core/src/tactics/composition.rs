use std::collections::BTreeMap;

use crate::error::SetupError;
use crate::state::{Race, UnitTypeId};

/// Target share of one unit type in the army.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionEntry {
    /// Fraction of army supply, 0.0 to 1.0.
    pub proportion: f32,
    /// Lower values are filled first.
    pub priority: u8,
}

/// Desired army make-up, read-only during play.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArmyComposition {
    entries: BTreeMap<UnitTypeId, CompositionEntry>,
}

impl ArmyComposition {
    const SUM_TOLERANCE: f32 = 1e-3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, unit_type: UnitTypeId, proportion: f32, priority: u8) -> Self {
        self.entries.insert(
            unit_type,
            CompositionEntry {
                proportion,
                priority,
            },
        );
        self
    }

    /// Single-unit compositions used when no table is supplied.
    pub fn default_for(race: Race) -> Self {
        let unit_type = match race {
            Race::Protoss => UnitTypeId::Stalker,
            Race::Terran => UnitTypeId::Marine,
            Race::Zerg => UnitTypeId::Roach,
        };
        Self::new().with(unit_type, 1.0, 0)
    }

    pub fn get(&self, unit_type: UnitTypeId) -> Option<CompositionEntry> {
        self.entries.get(&unit_type).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in fill order: priority first, then unit type.
    pub fn by_priority(&self) -> Vec<(UnitTypeId, CompositionEntry)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(t, e)| (*t, *e)).collect();
        entries.sort_by_key(|(unit_type, entry)| (entry.priority, *unit_type));
        entries
    }

    /// # Errors
    ///
    /// Returns [`SetupError::CompositionProportion`] for an entry outside
    /// 0.0..=1.0 and [`SetupError::CompositionSum`] when the proportions do
    /// not add up to one.
    pub fn validate(&self) -> Result<(), SetupError> {
        for (unit_type, entry) in &self.entries {
            if !(0.0..=1.0).contains(&entry.proportion) {
                return Err(SetupError::CompositionProportion {
                    unit: (*unit_type).into(),
                    proportion: entry.proportion,
                });
            }
        }

        let sum: f32 = self.entries.values().map(|e| e.proportion).sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(SetupError::CompositionSum { sum });
        }
        Ok(())
    }
}
