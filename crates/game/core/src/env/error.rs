//! Collaborator access errors.

use crate::error::{ErrorSeverity, GameError};

/// A collaborator the session needs was not wired into the [`super::TacticsEnv`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("SpatialOracle not available")]
    SpatialNotAvailable,

    #[error("VisibilityOracle not available")]
    VisibilityNotAvailable,

    #[error("TargetPriorityOracle not available")]
    PriorityNotAvailable,

    #[error("WeaponRangeOracle not available")]
    WeaponRangeNotAvailable,

    #[error("PathingOracle not available")]
    PathingNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Without pathing the army still attack-moves.
            OracleError::PathingNotAvailable => ErrorSeverity::Recoverable,
            OracleError::SpatialNotAvailable
            | OracleError::VisibilityNotAvailable
            | OracleError::PriorityNotAvailable
            | OracleError::WeaponRangeNotAvailable => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::SpatialNotAvailable => "ORACLE_SPATIAL_NOT_AVAILABLE",
            OracleError::VisibilityNotAvailable => "ORACLE_VISIBILITY_NOT_AVAILABLE",
            OracleError::PriorityNotAvailable => "ORACLE_PRIORITY_NOT_AVAILABLE",
            OracleError::WeaponRangeNotAvailable => "ORACLE_WEAPON_RANGE_NOT_AVAILABLE",
            OracleError::PathingNotAvailable => "ORACLE_PATHING_NOT_AVAILABLE",
        }
    }
}
