use crate::state::{CostGrid, Point};

/// Path planning over a [`CostGrid`].
pub trait PathingOracle: Send + Sync {
    /// Next waypoint from `from` toward `to`, or `None` when no progress can
    /// be made.
    fn next_waypoint(&self, grid: &CostGrid, from: Point, to: Point) -> Option<Point>;

    /// Closest low-cost point within `radius` of `from`.
    fn safe_spot(&self, grid: &CostGrid, from: Point, radius: f32) -> Option<Point>;
}
