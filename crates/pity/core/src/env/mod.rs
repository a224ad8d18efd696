//! Capabilities the engine consumes from its environment.
//!
//! The engine never reaches for ambient state. Randomness is injected through
//! [`RandomSource`], so every outcome is reproducible from the samples fed in.
mod rng;

pub use rng::{PcgSource, RandomSource, ScriptedSource};
