//! Collaborators the tactical core calls into.
//!
//! Everything the core does not compute itself (spatial queries, fog of war,
//! focus-fire policy, weapon range, path planning) sits behind a trait here.
//! [`TacticsEnv`] bundles the read-only ones for a single tick; the mutable
//! command sink and role store are passed separately.
mod combat;
mod command;
mod error;
mod pathing;
mod spatial;

pub use combat::{TargetPriorityOracle, WeaponRangeOracle};
pub use command::{CommandSink, RoleStore, UnitRole};
pub use error::OracleError;
pub use pathing::PathingOracle;
pub use spatial::{QueryScope, SpatialOracle, VisibilityOracle};

/// Read-only collaborators available during one tick.
#[derive(Clone, Copy)]
pub struct TacticsEnv<'a> {
    spatial: Option<&'a dyn SpatialOracle>,
    visibility: Option<&'a dyn VisibilityOracle>,
    priority: Option<&'a dyn TargetPriorityOracle>,
    weapon_range: Option<&'a dyn WeaponRangeOracle>,
    pathing: Option<&'a dyn PathingOracle>,
}

impl<'a> TacticsEnv<'a> {
    pub fn new(
        spatial: Option<&'a dyn SpatialOracle>,
        visibility: Option<&'a dyn VisibilityOracle>,
        priority: Option<&'a dyn TargetPriorityOracle>,
        weapon_range: Option<&'a dyn WeaponRangeOracle>,
        pathing: Option<&'a dyn PathingOracle>,
    ) -> Self {
        Self {
            spatial,
            visibility,
            priority,
            weapon_range,
            pathing,
        }
    }

    pub fn with_all(
        spatial: &'a dyn SpatialOracle,
        visibility: &'a dyn VisibilityOracle,
        priority: &'a dyn TargetPriorityOracle,
        weapon_range: &'a dyn WeaponRangeOracle,
        pathing: &'a dyn PathingOracle,
    ) -> Self {
        Self::new(
            Some(spatial),
            Some(visibility),
            Some(priority),
            Some(weapon_range),
            Some(pathing),
        )
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None, None)
    }

    /// # Errors
    ///
    /// Returns `OracleError::SpatialNotAvailable` if no spatial oracle was provided.
    pub fn spatial(&self) -> Result<&'a dyn SpatialOracle, OracleError> {
        self.spatial.ok_or(OracleError::SpatialNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::VisibilityNotAvailable` if no visibility oracle was provided.
    pub fn visibility(&self) -> Result<&'a dyn VisibilityOracle, OracleError> {
        self.visibility.ok_or(OracleError::VisibilityNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::PriorityNotAvailable` if no priority oracle was provided.
    pub fn priority(&self) -> Result<&'a dyn TargetPriorityOracle, OracleError> {
        self.priority.ok_or(OracleError::PriorityNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::WeaponRangeNotAvailable` if no weapon range oracle was provided.
    pub fn weapon_range(&self) -> Result<&'a dyn WeaponRangeOracle, OracleError> {
        self.weapon_range.ok_or(OracleError::WeaponRangeNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::PathingNotAvailable` if no pathing oracle was provided.
    pub fn pathing(&self) -> Result<&'a dyn PathingOracle, OracleError> {
        self.pathing.ok_or(OracleError::PathingNotAvailable)
    }
}

impl core::fmt::Debug for TacticsEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TacticsEnv")
            .field("spatial", &self.spatial.is_some())
            .field("visibility", &self.visibility.is_some())
            .field("priority", &self.priority.is_some())
            .field("weapon_range", &self.weapon_range.is_some())
            .field("pathing", &self.pathing.is_some())
            .finish()
    }
}
