//! Random source selection for the session.

use pity_core::{PcgSource, RandomSource};
use rand::Rng;

/// Thread-local RNG from `rand`. Not reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSource;

impl RandomSource for ThreadSource {
    fn sample(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Seeded PCG when a seed is configured, the thread RNG otherwise.
pub fn select_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            Box::new(PcgSource::from_seed(seed))
        }
        None => Box::new(ThreadSource),
    }
}
