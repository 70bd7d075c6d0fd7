use super::{Point, UnitTag, UnitTypeId};

/// Progress of a researchable upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeStatus {
    #[default]
    NotStarted,
    Pending,
    Researched,
}

impl UpgradeStatus {
    /// Research is underway or done; another order would be wasted.
    pub fn is_started(self) -> bool {
        !matches!(self, UpgradeStatus::NotStarted)
    }
}

/// Resources and supply for the current tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EconomySnapshot {
    pub minerals: u32,
    pub vespene: u32,
    pub supply_used: u32,
    pub supply_cap: u32,
    /// Supply providers already under construction.
    pub supply_pending: u32,
    /// The external build order has no steps left.
    pub build_order_complete: bool,
    pub burrow: UpgradeStatus,
}

impl EconomySnapshot {
    pub fn supply_left(&self) -> u32 {
        self.supply_cap.saturating_sub(self.supply_used)
    }

    pub fn can_afford(&self, minerals: u32, vespene: u32) -> bool {
        self.minerals >= minerals && self.vespene >= vespene
    }
}

/// A friendly structure relevant to macro tasks.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnStructure {
    pub tag: UnitTag,
    pub unit_type: UnitTypeId,
    pub position: Point,
    pub energy: f32,
    /// 0.0 while placed, 1.0 once finished.
    pub build_progress: f32,
    /// No production or research queued.
    pub is_idle: bool,
}

impl OwnStructure {
    pub fn new(tag: UnitTag, unit_type: UnitTypeId, position: Point) -> Self {
        Self {
            tag,
            unit_type,
            position,
            energy: 0.0,
            build_progress: 1.0,
            is_idle: true,
        }
    }

    pub fn with_energy(mut self, energy: f32) -> Self {
        self.energy = energy;
        self
    }

    pub fn with_build_progress(mut self, build_progress: f32) -> Self {
        self.build_progress = build_progress;
        self
    }

    pub fn busy(mut self) -> Self {
        self.is_idle = false;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.build_progress >= 1.0
    }
}

/// A mineral patch with its remaining contents.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MineralField {
    pub tag: UnitTag,
    pub position: Point,
    pub contents: u32,
}
