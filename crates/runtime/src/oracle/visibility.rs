use game_core::{Point, VisibilityOracle};

/// Visibility from a set of sight circles.
#[derive(Clone, Debug, Default)]
pub struct SightVisibility {
    sight: Vec<(Point, f32)>,
    reveal_all: bool,
}

impl SightVisibility {
    pub fn new(sight: Vec<(Point, f32)>) -> Self {
        Self {
            sight,
            reveal_all: false,
        }
    }

    /// No fog of war.
    pub fn revealed() -> Self {
        Self {
            sight: Vec::new(),
            reveal_all: true,
        }
    }

    pub fn add_sight(&mut self, center: Point, range: f32) {
        self.sight.push((center, range));
    }
}

impl VisibilityOracle for SightVisibility {
    fn is_visible(&self, point: Point) -> bool {
        self.reveal_all
            || self
                .sight
                .iter()
                .any(|&(center, range)| center.distance(point) <= range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_inside_any_circle() {
        let mut visibility = SightVisibility::new(vec![(Point::ORIGIN, 5.0)]);
        assert!(visibility.is_visible(Point::new(3.0, 4.0)));
        assert!(!visibility.is_visible(Point::new(10.0, 0.0)));
        visibility.add_sight(Point::new(10.0, 0.0), 1.0);
        assert!(visibility.is_visible(Point::new(10.0, 0.0)));
        assert!(SightVisibility::revealed().is_visible(Point::new(1e6, 1e6)));
    }
}
