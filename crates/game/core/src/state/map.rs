use super::Point;

/// Static map facts known at game start.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapInfo {
    pub player_start: Point,
    /// Candidate enemy start locations; one on two-player maps.
    pub enemy_starts: Vec<Point>,
    /// Expansion sites in the fixed order the attack scan visits them.
    pub expansions: Vec<Point>,
}

impl MapInfo {
    pub fn new(player_start: Point, enemy_starts: Vec<Point>, expansions: Vec<Point>) -> Self {
        Self {
            player_start,
            enemy_starts,
            expansions,
        }
    }
}
