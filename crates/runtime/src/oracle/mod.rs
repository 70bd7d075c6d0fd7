//! In-memory collaborator implementations.
//!
//! These back the `game-core` collaborator traits for the replay client and
//! tests. [`OracleManager`] owns one of each and lends them out as a
//! [`TacticsEnv`] per tick.
mod combat;
mod pathing;
mod spatial;
mod visibility;

use game_core::{CostGrid, HostileSnapshot, TacticsEnv};

pub use combat::{GeometricWeaponRange, WeakestFirst};
pub use pathing::StraightLinePathing;
pub use spatial::SnapshotSpatial;
pub use visibility::SightVisibility;

/// Owns every in-memory collaborator.
#[derive(Clone, Debug, Default)]
pub struct OracleManager {
    pub spatial: SnapshotSpatial,
    pub visibility: SightVisibility,
    pub priority: WeakestFirst,
    pub weapon_range: GeometricWeaponRange,
    pub pathing: StraightLinePathing,
}

impl OracleManager {
    pub fn new(spatial: SnapshotSpatial, visibility: SightVisibility) -> Self {
        Self {
            spatial,
            visibility,
            ..Default::default()
        }
    }

    /// Replaces hostiles and cost field ahead of the next tick.
    pub fn refresh(&mut self, hostiles: Vec<HostileSnapshot>, grid: Option<CostGrid>) {
        self.spatial.refresh(hostiles, grid);
    }

    pub fn as_env(&self) -> TacticsEnv<'_> {
        TacticsEnv::with_all(
            &self.spatial,
            &self.visibility,
            &self.priority,
            &self.weapon_range,
            &self.pathing,
        )
    }
}
