//! Random sample sources for outcome resolution.
//!
//! # Determinism
//!
//! [`PcgSource`] and [`ScriptedSource`] are fully deterministic: the same
//! seed or script always yields the same sequence. Non-deterministic sources
//! (thread RNG) belong to the application layer.

/// Produces uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next sample in `[0, 1)`.
    fn sample(&mut self) -> f64;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Each sample uses one
/// 32-bit output scaled into `[0, 1)`.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// 2^32, the exclusive upper bound of a `u32` output.
    const OUTPUT_RANGE: f64 = 4_294_967_296.0;

    pub const fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl RandomSource for PcgSource {
    fn sample(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::OUTPUT_RANGE
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn sample(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}
