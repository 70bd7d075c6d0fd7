use super::{Point, UnitTag, UnitTypeId};

/// Read-only view of one enemy unit or structure for the current tick.
///
/// Snapshots are rebuilt by the spatial collaborator every tick and are never
/// retained by the core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostileSnapshot {
    pub tag: UnitTag,
    pub unit_type: UnitTypeId,
    pub position: Point,
    pub radius: f32,
    pub health_percentage: f32,
    pub is_structure: bool,
    /// Last known position of something no longer visible.
    pub is_memory: bool,
    pub is_flying: bool,
}

impl HostileSnapshot {
    pub const DEFAULT_RADIUS: f32 = 0.5;

    pub fn new(tag: UnitTag, unit_type: UnitTypeId, position: Point) -> Self {
        Self {
            tag,
            unit_type,
            position,
            radius: Self::DEFAULT_RADIUS,
            health_percentage: 1.0,
            is_structure: unit_type.is_structure(),
            is_memory: false,
            is_flying: false,
        }
    }

    pub fn memory(mut self) -> Self {
        self.is_memory = true;
        self
    }

    pub fn flying(mut self) -> Self {
        self.is_flying = true;
        self
    }

    pub fn with_health(mut self, health_percentage: f32) -> Self {
        self.health_percentage = health_percentage;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Whether the evaluator should consider this hostile at all.
    pub fn is_engageable(&self) -> bool {
        !self.is_memory && !self.unit_type.is_nuisance()
    }
}
