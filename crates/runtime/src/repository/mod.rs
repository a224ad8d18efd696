//! Repository layer for the persisted progress record.
//!
//! The record is a flat load/save of the four running counters at a single
//! location. Bounds are re-checked on load, so a hand-edited file can never
//! produce a [`pity_core::PityState`] that violates its invariants.

mod error;
mod file;
mod memory;
mod record;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use record::StateRecord;
pub use traits::StateRepository;
