//! Errors raised by application services.

use pity_core::{ErrorSeverity, PityError, SimulationError};
use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Only minor and common pulls can be recorded directly.
    #[error("a {0} pull must go through the 50/50 simulation")]
    RareNotRecordable(pity_core::Rarity),
}

impl ServiceError {
    /// Severity when the failure comes from a core rule, `None` for I/O.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            Self::Simulation(err) => Some(err.severity()),
            Self::RareNotRecordable(_) => Some(ErrorSeverity::Precondition),
            Self::Repository(RepositoryError::InvalidState(err)) => Some(err.severity()),
            Self::Repository(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
