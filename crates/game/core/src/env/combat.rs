use crate::state::{HostileSnapshot, Unit};

/// Focus-fire policy.
pub trait TargetPriorityOracle: Send + Sync {
    /// Chooses the hostile to attack; `None` only for an empty slice.
    fn pick(&self, candidates: &[HostileSnapshot]) -> Option<HostileSnapshot>;
}

/// Effective weapon range check.
pub trait WeaponRangeOracle: Send + Sync {
    /// Subset of `candidates` that `unit` can fire on without moving.
    fn in_weapon_range(&self, unit: &Unit, candidates: &[HostileSnapshot]) -> Vec<HostileSnapshot>;
}
