//! Repository contract for saving and loading the progress snapshot.

use pity_core::PityState;

use super::Result;

/// Repository for the single persisted progress record.
///
/// There is exactly one well-known location per repository, so no method
/// takes a key. Implementations must leave the previous record intact when a
/// save fails.
pub trait StateRepository: Send + Sync {
    /// Replace the stored record with `state`.
    fn save(&self, state: &PityState) -> Result<()>;

    /// Load the stored record, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<PityState>>;

    /// Check if a record exists.
    fn exists(&self) -> bool;

    /// Remove the stored record. Deleting a missing record is not an error.
    fn delete(&self) -> Result<()>;
}
