//! Published base rates and pity thresholds.

use pity_core::{ProbabilityEngine, Rules};

/// Rates as percentages, thresholds as pull counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRates {
    pub rare_percent: f64,
    pub minor_percent: f64,
    pub common_percent: f64,

    pub minor_guarantee_window: u32,
    pub soft_pity_start: u32,
    pub soft_pity_increment_percent: f64,
    pub hard_pity: u32,
    pub featured_guarantee: u32,
    pub bonus_repeat_threshold: u32,
    pub free_pull_threshold: u32,

    pub tie_break_percent: f64,
    pub prior_variant_percent: f64,
    pub standard_variant_percent: f64,

    /// Mean pulls to a rare draw from a fresh pity.
    pub expected_pulls_to_rare: f64,
}

impl BaseRates {
    pub fn from_rules(rules: &Rules) -> Self {
        Self {
            rare_percent: rules.base_draw_rate * 100.0,
            minor_percent: rules.minor_draw_rate * 100.0,
            common_percent: rules.common_draw_rate * 100.0,
            minor_guarantee_window: rules.minor_guarantee_window,
            soft_pity_start: rules.soft_pity_start,
            soft_pity_increment_percent: rules.soft_pity_increment * 100.0,
            hard_pity: rules.hard_pity,
            featured_guarantee: rules.featured_guarantee,
            bonus_repeat_threshold: rules.bonus_repeat_threshold,
            free_pull_threshold: rules.free_pull_threshold,
            tie_break_percent: rules.tie_break_probability * 100.0,
            prior_variant_percent: rules.prior_variant_probability * 100.0,
            standard_variant_percent: rules.standard_variant_probability() * 100.0,
            expected_pulls_to_rare: ProbabilityEngine::new(*rules).expected_pulls_to_rare(),
        }
    }
}
