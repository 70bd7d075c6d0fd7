use tracing::{debug, info, warn};

use crate::env::VisibilityOracle;
use crate::error::SetupError;
use crate::state::Point;

/// World facts the attack target depends on this tick.
#[derive(Clone, Copy, Debug)]
pub struct TargetingView<'a> {
    pub player_start: Point,
    /// Positions of enemy structures currently visible.
    pub enemy_structures: &'a [Point],
    /// Elapsed game seconds.
    pub game_time: f32,
}

/// Chooses the single point the army is sent to.
///
/// Owns the only state that survives between ticks on this path: the
/// expansion cursor and the current base target.
#[derive(Clone, Debug)]
pub struct TargetSelector {
    expansions: Vec<Point>,
    cursor: usize,
    current_base_target: Point,
    enemy_start: Option<Point>,
    early_game_secs: f32,
}

impl TargetSelector {
    /// # Errors
    ///
    /// Returns [`SetupError::NoExpansionSites`] when `expansions` is empty.
    pub fn new(
        expansions: Vec<Point>,
        enemy_starts: &[Point],
        early_game_secs: f32,
    ) -> Result<Self, SetupError> {
        if expansions.is_empty() {
            return Err(SetupError::NoExpansionSites);
        }
        if enemy_starts.len() > 1 {
            warn!(
                candidates = enemy_starts.len(),
                "multiple enemy start locations; using the first"
            );
        }

        let enemy_start = enemy_starts.first().copied();
        let mut selector = Self {
            current_base_target: expansions[0],
            expansions,
            cursor: 0,
            enemy_start,
            early_game_secs,
        };
        match enemy_start {
            Some(start) => selector.current_base_target = start,
            None => selector.current_base_target = selector.advance(),
        }
        Ok(selector)
    }

    pub fn current_base_target(&self) -> Point {
        self.current_base_target
    }

    pub fn enemy_start(&self) -> Option<Point> {
        self.enemy_start
    }

    /// Picks this tick's attack point. First match wins:
    ///
    /// 1. the visible enemy structure closest to our start;
    /// 2. during the early game, the enemy start location;
    /// 3. the current base target, moving on to the next expansion once the
    ///    current one has been seen.
    pub fn compute_attack_target(
        &mut self,
        view: &TargetingView<'_>,
        visibility: &dyn VisibilityOracle,
    ) -> Point {
        if let Some(structure) = view.player_start.closest(view.enemy_structures.iter().copied()) {
            return structure;
        }

        if view.game_time < self.early_game_secs {
            if let Some(start) = self.enemy_start {
                return start;
            }
        }

        if visibility.is_visible(self.current_base_target) {
            let previous = self.current_base_target;
            self.current_base_target = self.advance();
            info!(
                from = %previous,
                to = %self.current_base_target,
                "base target scouted; moving to next expansion"
            );
        } else {
            debug!(target = %self.current_base_target, "holding base target");
        }
        self.current_base_target
    }

    /// Next expansion in the fixed cycle.
    fn advance(&mut self) -> Point {
        let site = self.expansions[self.cursor];
        self.cursor = (self.cursor + 1) % self.expansions.len();
        site
    }
}
