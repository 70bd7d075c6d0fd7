use std::fmt;

/// Engine-assigned identifier of a unit or structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTag(pub u64);

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous map position in game distance units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Straight-line distance.
    pub fn distance(self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Moves up to `step` toward `target`, stopping on it.
    pub fn towards(self, target: Point, step: f32) -> Point {
        let distance = self.distance(target);
        if distance <= step || distance <= f32::EPSILON {
            return target;
        }
        let ratio = step / distance;
        Point::new(
            self.x + (target.x - self.x) * ratio,
            self.y + (target.y - self.y) * ratio,
        )
    }

    /// Moves `step` directly away from `threat`.
    ///
    /// When both points coincide there is no direction to flee in, so the
    /// point is returned unchanged.
    pub fn away_from(self, threat: Point, step: f32) -> Point {
        let distance = self.distance(threat);
        if distance <= f32::EPSILON {
            return self;
        }
        let ratio = step / distance;
        Point::new(
            self.x + (self.x - threat.x) * ratio,
            self.y + (self.y - threat.y) * ratio,
        )
    }

    /// Returns the closest candidate, ties resolved by first occurrence.
    pub fn closest<I>(self, candidates: I) -> Option<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        candidates.into_iter().fold(None, |best: Option<Point>, candidate| match best {
            Some(current) if current.distance_squared(self) <= candidate.distance_squared(self) => {
                Some(current)
            }
            _ => Some(candidate),
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
