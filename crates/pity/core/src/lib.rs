//! Deterministic pity mechanics for a gacha-style banner.
//!
//! `pity-core` defines the rule set, the per-pull probability model, the
//! derived counters, the progress snapshot, and 50/50 outcome resolution.
//! Everything here is a pure function over immutable values; randomness is
//! injected through [`env::RandomSource`] and nothing performs I/O.
pub mod counters;
pub mod env;
pub mod error;
pub mod probability;
pub mod rules;
pub mod simulator;
pub mod state;

pub use counters::CounterEngine;
pub use env::{PcgSource, RandomSource, ScriptedSource};
pub use error::{ErrorSeverity, PityError};
pub use probability::{Probability, ProbabilityEngine, ProbabilityError};
pub use rules::{Rules, RulesError};
pub use simulator::{PullOutcome, PullSimulator, Rarity, SimulationError, Variant};
pub use state::{PityCounters, PityState, StateError};
