use super::Point;

/// Traversal cost field over the map, one cell per integer coordinate.
///
/// Cells hold [`CostGrid::BASE_COST`] on open ground, more where enemies
/// threaten, and `f32::INFINITY` where the ground cannot be walked.
#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid {
    width: u32,
    height: u32,
    cells: Vec<f32>,
}

impl CostGrid {
    pub const BASE_COST: f32 = 1.0;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Self::BASE_COST; width as usize * height as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn cell_of(point: Point) -> (i64, i64) {
        (point.x.floor() as i64, point.y.floor() as i64)
    }

    /// Cost of the cell containing `point`, or `None` off the map.
    pub fn cost(&self, point: Point) -> Option<f32> {
        let (x, y) = Self::cell_of(point);
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_pathable(&self, point: Point) -> bool {
        self.cost(point).is_some_and(f32::is_finite)
    }

    /// Pathable and not under any enemy influence.
    pub fn is_safe(&self, point: Point) -> bool {
        self.cost(point).is_some_and(|c| c <= Self::BASE_COST)
    }

    pub fn block(&mut self, x: u32, y: u32) {
        if let Some(i) = self.index(i64::from(x), i64::from(y)) {
            self.cells[i] = f32::INFINITY;
        }
    }

    /// Adds `weight` to every pathable cell whose centre lies within `radius`.
    pub fn add_influence(&mut self, center: Point, radius: f32, weight: f32) {
        let (cx, cy) = Self::cell_of(center);
        let reach = radius.ceil() as i64;
        for y in (cy - reach)..=(cy + reach) {
            for x in (cx - reach)..=(cx + reach) {
                let Some(i) = self.index(x, y) else { continue };
                let cell_center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if cell_center.distance(center) <= radius && self.cells[i].is_finite() {
                    self.cells[i] += weight;
                }
            }
        }
    }
}
