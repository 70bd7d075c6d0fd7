//! Common error infrastructure for game-core.
//!
//! Ticks never fail: every decision has a safe fallback. Errors only surface
//! while a session is being set up or when a collaborator reports a broken
//! invariant (a role assigned twice, for instance).

use crate::env::UnitRole;
use crate::state::UnitTag;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can continue, possibly with a fallback.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the session cannot start.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant, for log fields and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building a tactics session.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    /// The map data supplied no expansion sites to scan.
    #[error("map reports no expansion sites")]
    NoExpansionSites,

    /// Army composition proportions must add up to one.
    #[error("army composition proportions sum to {sum}, expected 1.0")]
    CompositionSum { sum: f32 },

    /// A single composition entry is outside 0.0..=1.0.
    #[error("army composition entry for {unit} has proportion {proportion}")]
    CompositionProportion { unit: &'static str, proportion: f32 },

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SetupError::NoExpansionSites => ErrorSeverity::Fatal,
            SetupError::CompositionSum { .. }
            | SetupError::CompositionProportion { .. }
            | SetupError::InvalidConfig { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SetupError::NoExpansionSites => "SETUP_NO_EXPANSION_SITES",
            SetupError::CompositionSum { .. } => "SETUP_COMPOSITION_SUM",
            SetupError::CompositionProportion { .. } => "SETUP_COMPOSITION_PROPORTION",
            SetupError::InvalidConfig { .. } => "SETUP_INVALID_CONFIG",
        }
    }
}

/// Errors reported by a [`crate::RoleStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    /// Roles are assigned once per unit lifetime.
    #[error("unit {tag} already holds role {existing:?}")]
    AlreadyAssigned { tag: UnitTag, existing: UnitRole },
}

impl GameError for RoleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            RoleError::AlreadyAssigned { .. } => "ROLE_ALREADY_ASSIGNED",
        }
    }
}
