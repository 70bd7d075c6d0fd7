//! Hostile lookup and cost field served through [`game_core::SpatialOracle`].
use std::collections::HashMap;

use game_core::{CostGrid, HostileSnapshot, Point, QueryScope, SpatialOracle, UnitTag};

/// Linear-scan spatial index over one tick's hostile snapshots.
#[derive(Clone, Debug, Default)]
pub struct SnapshotSpatial {
    hostiles: Vec<HostileSnapshot>,
    grid: Option<CostGrid>,
}

impl SnapshotSpatial {
    pub fn new(hostiles: Vec<HostileSnapshot>, grid: Option<CostGrid>) -> Self {
        Self { hostiles, grid }
    }

    pub fn hostiles(&self) -> &[HostileSnapshot] {
        &self.hostiles
    }

    /// Replaces the snapshot for the next tick.
    pub fn refresh(&mut self, hostiles: Vec<HostileSnapshot>, grid: Option<CostGrid>) {
        self.hostiles = hostiles;
        self.grid = grid;
    }
}

impl SpatialOracle for SnapshotSpatial {
    fn nearby_hostiles(
        &self,
        points: &[(UnitTag, Point)],
        radius: f32,
        scope: QueryScope,
    ) -> HashMap<UnitTag, Vec<HostileSnapshot>> {
        points
            .iter()
            .map(|&(tag, point)| {
                let near = self
                    .hostiles
                    .iter()
                    .filter(|h| scope == QueryScope::AllEnemy || !h.is_flying)
                    .filter(|h| h.position.distance(point) <= radius)
                    .copied()
                    .collect();
                (tag, near)
            })
            .collect()
    }

    fn cost_field(&self) -> Option<&CostGrid> {
        self.grid.as_ref()
    }
}
