//! Straight-line planner over [`CostGrid`] cells.
use game_core::{CostGrid, PathingOracle, Point};

/// Walks straight toward the goal in fixed steps and refuses to cross
/// blocked cells. Good enough for open maps and tests; a real engine link
/// would plug in its own planner.
#[derive(Clone, Copy, Debug)]
pub struct StraightLinePathing {
    step: f32,
}

impl StraightLinePathing {
    pub const DEFAULT_STEP: f32 = 4.0;
    /// Closer than this to the goal counts as arrived.
    const ARRIVED: f32 = 0.01;

    pub fn new(step: f32) -> Self {
        Self { step }
    }

    fn segment_clear(grid: &CostGrid, from: Point, to: Point) -> bool {
        let samples = from.distance(to).ceil().max(1.0) as u32;
        (1..=samples).all(|i| {
            let t = i as f32 / samples as f32;
            let probe = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            grid.is_pathable(probe)
        })
    }
}

impl Default for StraightLinePathing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

impl PathingOracle for StraightLinePathing {
    fn next_waypoint(&self, grid: &CostGrid, from: Point, to: Point) -> Option<Point> {
        if from.distance(to) < Self::ARRIVED {
            return None;
        }
        let waypoint = from.towards(to, self.step);
        Self::segment_clear(grid, from, waypoint).then_some(waypoint)
    }

    fn safe_spot(&self, grid: &CostGrid, from: Point, radius: f32) -> Option<Point> {
        let reach = radius.ceil() as i64;
        let (cx, cy) = (from.x.floor() as i64, from.y.floor() as i64);

        let mut best: Option<(f32, Point)> = None;
        for y in (cy - reach)..=(cy + reach) {
            for x in (cx - reach)..=(cx + reach) {
                let candidate = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = candidate.distance(from);
                if distance > radius || !grid.is_safe(candidate) {
                    continue;
                }
                if best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, candidate));
                }
            }
        }
        best.map(|(_, point)| point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_toward_goal_on_open_ground() {
        let grid = CostGrid::new(32, 32);
        let pathing = StraightLinePathing::default();
        let waypoint = pathing
            .next_waypoint(&grid, Point::new(1.0, 1.0), Point::new(21.0, 1.0))
            .unwrap();
        assert!((waypoint.x - 5.0).abs() < 1e-4);
        assert!((waypoint.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn blocked_line_yields_nothing() {
        let mut grid = CostGrid::new(32, 32);
        grid.block(3, 1);
        let pathing = StraightLinePathing::default();
        assert_eq!(
            pathing.next_waypoint(&grid, Point::new(1.5, 1.5), Point::new(21.5, 1.5)),
            None
        );
    }

    #[test]
    fn goal_off_grid_yields_nothing() {
        let grid = CostGrid::new(8, 8);
        let pathing = StraightLinePathing::default();
        assert_eq!(
            pathing.next_waypoint(&grid, Point::new(6.0, 6.0), Point::new(200.0, 200.0)),
            None
        );
    }

    #[test]
    fn safe_spot_avoids_influence() {
        let mut grid = CostGrid::new(20, 20);
        grid.add_influence(Point::new(10.0, 10.0), 3.0, 50.0);
        let pathing = StraightLinePathing::default();
        let spot = pathing.safe_spot(&grid, Point::new(10.0, 10.0), 8.0).unwrap();
        assert!(grid.is_safe(spot));
        assert!(spot.distance(Point::new(10.0, 10.0)) <= 8.0);
        assert!(spot.distance(Point::new(10.0, 10.0)) > 3.0);
    }
}
