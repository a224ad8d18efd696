//! In-memory StateRepository implementation for tests and local runs.

use std::sync::RwLock;

use pity_core::PityState;

use crate::repository::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
#[derive(Debug, Default)]
pub struct InMemoryStateRepo {
    state: RwLock<Option<PityState>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a record already stored.
    pub fn with_state(state: PityState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
        }
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, state: &PityState) -> Result<()> {
        let mut stored = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(*state);
        Ok(())
    }

    fn load(&self) -> Result<Option<PityState>> {
        let stored = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(*stored)
    }

    fn exists(&self) -> bool {
        self.state
            .read()
            .map(|stored| stored.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut stored = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}
