//! Unified error types surfaced by the runtime API.
//!
//! Ticks never return errors; these only come out of session construction.
//! Duplicate role assignments are logged where they happen.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, SetupError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Setup(#[from] SetupError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Setup(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Setup(err) => err.error_code(),
        }
    }
}
