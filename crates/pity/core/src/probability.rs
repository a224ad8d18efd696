//! Rare-tier draw probabilities as a function of accumulated pity.
//!
//! The draw probability is piecewise in the 0-indexed count of pulls already
//! made without a rare draw:
//!
//! ```text
//! p(r) = 1.0                                        r >= hard_pity - 1
//!      = min(1, base + (r - (soft_start - 1) + 1) * inc)   r >= soft_start - 1
//!      = base                                       otherwise
//! ```
//!
//! Everything else here (expected pulls, cumulative odds) composes `p(r)`.

use core::fmt;

use crate::error::{ErrorSeverity, PityError};
use crate::rules::Rules;

/// A probability in [0, 1].
///
/// Deserialization goes through [`Probability::new`], so stored values are
/// bounds-checked like any other input.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Probability(f64);

impl Probability {
    /// Creates a probability, rejecting NaN and values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, ProbabilityError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProbabilityError::OutOfRange(value))
        }
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn certain() -> Self {
        Self(1.0)
    }

    /// Clamps an arithmetic result into [0, 1].
    ///
    /// Only for values produced by the engine's own formulas, where the
    /// inputs are already probabilities.
    fn saturating(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }

    pub fn as_percentage(self) -> f64 {
        self.0 * 100.0
    }

    pub fn is_certain(self) -> bool {
        self.0 >= 1.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percentage())
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> Self {
        probability.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ProbabilityError {
    #[error("probability must be between 0 and 1, got {0}")]
    OutOfRange(f64),
}

impl PityError for ProbabilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "PROBABILITY_OUT_OF_RANGE"
    }
}

/// Pure probability calculations over a rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProbabilityEngine {
    rules: Rules,
}

impl ProbabilityEngine {
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Probability of a rare draw on the next pull.
    ///
    /// `pulls_since_rare` is 0-indexed: the number of pulls already made
    /// without the rare tier. Monotonically non-decreasing, certain at
    /// `hard_pity - 1`.
    pub fn draw_probability(&self, pulls_since_rare: u32) -> Probability {
        let rules = &self.rules;
        let hard_index = rules.hard_pity.saturating_sub(1);
        let soft_index = rules.soft_pity_start.saturating_sub(1);

        if pulls_since_rare >= hard_index {
            return Probability::certain();
        }

        if pulls_since_rare >= soft_index {
            let pulls_in_soft = pulls_since_rare - soft_index + 1;
            let value = rules.base_draw_rate + f64::from(pulls_in_soft) * rules.soft_pity_increment;
            return Probability::saturating(value.min(1.0));
        }

        Probability::saturating(rules.base_draw_rate)
    }

    /// Pulls remaining until the minor-tier guarantee.
    ///
    /// Computed as `window - (pulls_since_minor % window)`, so a counter
    /// sitting exactly on the window reports the full window again rather
    /// than zero.
    pub fn pulls_to_minor_guarantee(&self, pulls_since_minor: u32) -> u32 {
        let window = self.rules.minor_guarantee_window;
        if window == 0 {
            return 0;
        }
        window - (pulls_since_minor % window)
    }

    /// Expected number of pulls to obtain a rare draw from a fresh pity.
    ///
    /// Sums `(t + 1) * P(first rare at t)` over every position up to hard
    /// pity, then adds the absorbing mass left at the boundary.
    pub fn expected_pulls_to_rare(&self) -> f64 {
        let hard_pity = self.rules.hard_pity;
        let mut expected = 0.0;
        let mut no_draw_yet = 1.0;

        for position in 0..hard_pity {
            let p = self.draw_probability(position).value();
            expected += f64::from(position + 1) * no_draw_yet * p;
            no_draw_yet *= 1.0 - p;
        }

        expected + f64::from(hard_pity) * no_draw_yet
    }

    /// Probability of at least one rare draw within the next `num_pulls`
    /// pulls, starting from `pulls_since_rare`.
    ///
    /// Once the window reaches hard pity the result is certain.
    pub fn cumulative_probability(&self, pulls_since_rare: u32, num_pulls: u32) -> Probability {
        let mut no_draw = 1.0;

        for offset in 0..num_pulls {
            let position = pulls_since_rare.saturating_add(offset);
            if position >= self.rules.hard_pity {
                return Probability::certain();
            }
            no_draw *= self.draw_probability(position).complement().value();
        }

        Probability::saturating(1.0 - no_draw)
    }
}
