//! Rule set: every tunable constant of the pity mechanic.

use crate::error::{ErrorSeverity, PityError};

/// Immutable bundle of base rates and thresholds.
///
/// Thresholds are 1-indexed pull counts. Only one rule set ships
/// ([`Rules::default`]); the engines take it by value so alternative sets can
/// be tested without touching global state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Per-pull rare-tier probability before any pity bonus.
    pub base_draw_rate: f64,
    /// Per-pull minor-tier probability.
    pub minor_draw_rate: f64,
    /// Per-pull common-tier probability.
    pub common_draw_rate: f64,

    /// Pull at which the soft pity increment starts applying.
    pub soft_pity_start: u32,
    /// Probability added per pull once inside soft pity.
    pub soft_pity_increment: f64,
    /// Pull at which the rare tier is guaranteed.
    pub hard_pity: u32,
    /// Pulls after which a minor-tier draw is guaranteed.
    pub minor_guarantee_window: u32,
    /// Banner pulls after which the featured variant is guaranteed.
    pub featured_guarantee: u32,
    /// Lifetime pulls unlocking a bonus repeat copy.
    pub bonus_repeat_threshold: u32,
    /// Banner pulls unlocking the free-pull reward.
    pub free_pull_threshold: u32,

    /// Probability of winning the 50/50.
    pub tie_break_probability: f64,
    /// Probability of each of the two prior limited variants on a lost 50/50.
    pub prior_variant_probability: f64,
}

impl Rules {
    pub const DEFAULT_BASE_DRAW_RATE: f64 = 0.008;
    pub const DEFAULT_MINOR_DRAW_RATE: f64 = 0.08;
    pub const DEFAULT_COMMON_DRAW_RATE: f64 = 0.912;
    pub const DEFAULT_SOFT_PITY_START: u32 = 65;
    pub const DEFAULT_SOFT_PITY_INCREMENT: f64 = 0.05;
    pub const DEFAULT_HARD_PITY: u32 = 80;
    pub const DEFAULT_MINOR_GUARANTEE_WINDOW: u32 = 10;
    pub const DEFAULT_FEATURED_GUARANTEE: u32 = 120;
    pub const DEFAULT_BONUS_REPEAT_THRESHOLD: u32 = 240;
    pub const DEFAULT_FREE_PULL_THRESHOLD: u32 = 60;
    pub const DEFAULT_TIE_BREAK_PROBABILITY: f64 = 0.5;
    pub const DEFAULT_PRIOR_VARIANT_PROBABILITY: f64 = 0.1428;

    pub const fn new() -> Self {
        Self {
            base_draw_rate: Self::DEFAULT_BASE_DRAW_RATE,
            minor_draw_rate: Self::DEFAULT_MINOR_DRAW_RATE,
            common_draw_rate: Self::DEFAULT_COMMON_DRAW_RATE,
            soft_pity_start: Self::DEFAULT_SOFT_PITY_START,
            soft_pity_increment: Self::DEFAULT_SOFT_PITY_INCREMENT,
            hard_pity: Self::DEFAULT_HARD_PITY,
            minor_guarantee_window: Self::DEFAULT_MINOR_GUARANTEE_WINDOW,
            featured_guarantee: Self::DEFAULT_FEATURED_GUARANTEE,
            bonus_repeat_threshold: Self::DEFAULT_BONUS_REPEAT_THRESHOLD,
            free_pull_threshold: Self::DEFAULT_FREE_PULL_THRESHOLD,
            tie_break_probability: Self::DEFAULT_TIE_BREAK_PROBABILITY,
            prior_variant_probability: Self::DEFAULT_PRIOR_VARIANT_PROBABILITY,
        }
    }

    /// Probability of the standard variant on a lost 50/50.
    pub fn standard_variant_probability(&self) -> f64 {
        1.0 - 2.0 * self.prior_variant_probability
    }

    /// Checks the rule set invariants.
    ///
    /// All probabilities must lie in [0, 1], soft pity must start strictly
    /// before hard pity, and the thresholds used as divisors or 1-indexed
    /// positions must be non-zero.
    pub fn validate(&self) -> Result<(), RulesError> {
        let probabilities = [
            ("base_draw_rate", self.base_draw_rate),
            ("minor_draw_rate", self.minor_draw_rate),
            ("common_draw_rate", self.common_draw_rate),
            ("soft_pity_increment", self.soft_pity_increment),
            ("tie_break_probability", self.tie_break_probability),
            ("prior_variant_probability", self.prior_variant_probability),
            (
                "standard_variant_probability",
                self.standard_variant_probability(),
            ),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(RulesError::ProbabilityOutOfRange { field, value });
            }
        }

        let windows = [
            ("soft_pity_start", self.soft_pity_start),
            ("minor_guarantee_window", self.minor_guarantee_window),
        ];
        for (field, value) in windows {
            if value == 0 {
                return Err(RulesError::ZeroWindow { field });
            }
        }

        if self.soft_pity_start >= self.hard_pity {
            return Err(RulesError::SoftPityNotBeforeHardPity {
                soft_pity_start: self.soft_pity_start,
                hard_pity: self.hard_pity,
            });
        }

        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule set invariant violations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RulesError {
    #[error("{field} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("soft pity start ({soft_pity_start}) must be below hard pity ({hard_pity})")]
    SoftPityNotBeforeHardPity { soft_pity_start: u32, hard_pity: u32 },

    #[error("{field} must be at least 1")]
    ZeroWindow { field: &'static str },
}

impl PityError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProbabilityOutOfRange { .. } => "RULES_PROBABILITY_OUT_OF_RANGE",
            Self::SoftPityNotBeforeHardPity { .. } => "RULES_SOFT_PITY_NOT_BEFORE_HARD_PITY",
            Self::ZeroWindow { .. } => "RULES_ZERO_WINDOW",
        }
    }
}
