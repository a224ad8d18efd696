//! Application services composed from the core engines.
//!
//! Read-only reports ([`StateReport`], [`ProbabilityTable`], [`BaseRates`])
//! are plain values computed from a [`pity_core::Rules`] and a snapshot.
//! [`PullService`] is the only service that writes, through a
//! [`crate::repository::StateRepository`].

mod error;
mod pull;
mod rates;
mod report;
mod table;

pub use error::{Result, ServiceError};
pub use pull::{PullService, SimulationReport};
pub use rates::BaseRates;
pub use report::StateReport;
pub use table::{ProbabilityRow, ProbabilityTable};
