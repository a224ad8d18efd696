//! Persistence and application services for the pity calculator.
//!
//! This crate sits between the pure engines in `pity-core` and the
//! interactive client. It owns everything that touches the filesystem and
//! composes the engines into the reports the client renders.
//!
//! Modules are organized by responsibility:
//! - [`repository`] persists the single progress record
//! - [`services`] builds reports and applies pulls, saving each new snapshot
pub mod repository;
pub mod services;

pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, StateRecord, StateRepository,
};
pub use services::{
    BaseRates, ProbabilityRow, ProbabilityTable, PullService, ServiceError, SimulationReport,
    StateReport,
};
