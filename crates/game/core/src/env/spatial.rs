use std::collections::HashMap;

use crate::state::{CostGrid, HostileSnapshot, Point, UnitTag};

/// Which hostiles a proximity query should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryScope {
    /// Units and structures on the ground; used for ground-only attackers.
    EnemyGround,
    AllEnemy,
}

/// Spatial index over hostile entities, refreshed by the engine each tick.
pub trait SpatialOracle: Send + Sync {
    /// Hostiles within `radius` of each query point, keyed by the querying
    /// unit. Units with nothing nearby may be missing from the map.
    fn nearby_hostiles(
        &self,
        points: &[(UnitTag, Point)],
        radius: f32,
        scope: QueryScope,
    ) -> HashMap<UnitTag, Vec<HostileSnapshot>>;

    /// Traversal cost field for this tick, if one could be built.
    fn cost_field(&self) -> Option<&CostGrid>;
}

/// Fog of war.
pub trait VisibilityOracle: Send + Sync {
    fn is_visible(&self, point: Point) -> bool;
}
