//! Clamped counters and milestone countdowns derived from raw pull counts.

use crate::rules::Rules;

/// Maps raw pull counts to the counters shown to players.
///
/// All inputs are non-negative pull counts; every function is total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CounterEngine {
    rules: Rules,
}

impl CounterEngine {
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// Pity counter: `min(r, hard_pity)`.
    pub fn pity_counter(&self, pulls_since_rare: u32) -> u32 {
        pulls_since_rare.min(self.rules.hard_pity)
    }

    /// Spark (banner) counter: `min(r, featured_guarantee)`.
    pub fn spark_counter(&self, banner_pulls: u32) -> u32 {
        banner_pulls.min(self.rules.featured_guarantee)
    }

    /// Dupe counter: `min(r, bonus_repeat_threshold)`.
    pub fn dupe_counter(&self, total_pulls: u32) -> u32 {
        total_pulls.min(self.rules.bonus_repeat_threshold)
    }

    pub fn pulls_to_soft_pity(&self, pulls_since_rare: u32) -> u32 {
        self.rules.soft_pity_start.saturating_sub(pulls_since_rare)
    }

    pub fn pulls_to_hard_pity(&self, pulls_since_rare: u32) -> u32 {
        self.rules.hard_pity.saturating_sub(pulls_since_rare)
    }

    pub fn pulls_to_featured(&self, banner_pulls: u32) -> u32 {
        self.rules.featured_guarantee.saturating_sub(banner_pulls)
    }

    pub fn pulls_to_bonus_repeat(&self, total_pulls: u32) -> u32 {
        self.rules.bonus_repeat_threshold.saturating_sub(total_pulls)
    }

    pub fn pulls_to_free_pull(&self, banner_pulls: u32) -> u32 {
        self.rules.free_pull_threshold.saturating_sub(banner_pulls)
    }
}
