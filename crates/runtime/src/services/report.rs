//! Full derived view of a progress snapshot.

use pity_core::{CounterEngine, PityState, ProbabilityEngine, Rules};

/// Everything the client shows about the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateReport {
    // Raw counters
    pub pulls_since_rare: u32,
    pub pulls_since_minor: u32,
    pub banner_pulls: u32,
    pub total_pulls: u32,

    // Clamped counters
    pub pity: u32,
    pub spark: u32,
    pub dupe: u32,

    // Countdowns
    pub pulls_to_minor_guarantee: u32,
    pub pulls_to_soft_pity: u32,
    pub pulls_to_hard_pity: u32,
    pub pulls_to_featured: u32,
    pub pulls_to_bonus_repeat: u32,
    pub pulls_to_free_pull: u32,

    pub in_soft_pity: bool,
    pub at_hard_pity: bool,
    pub at_featured_guarantee: bool,
}

impl StateReport {
    pub fn compute(rules: &Rules, state: &PityState) -> Self {
        let counters = CounterEngine::new(*rules);
        let probability = ProbabilityEngine::new(*rules);

        let rare = state.pulls_since_rare();
        let banner = state.banner_pulls();
        let total = state.total_pulls();

        Self {
            pulls_since_rare: rare,
            pulls_since_minor: state.pulls_since_minor(),
            banner_pulls: banner,
            total_pulls: total,
            pity: counters.pity_counter(rare),
            spark: counters.spark_counter(banner),
            dupe: counters.dupe_counter(total),
            pulls_to_minor_guarantee: probability
                .pulls_to_minor_guarantee(state.pulls_since_minor()),
            pulls_to_soft_pity: counters.pulls_to_soft_pity(rare),
            pulls_to_hard_pity: counters.pulls_to_hard_pity(rare),
            pulls_to_featured: counters.pulls_to_featured(banner),
            pulls_to_bonus_repeat: counters.pulls_to_bonus_repeat(total),
            pulls_to_free_pull: counters.pulls_to_free_pull(banner),
            in_soft_pity: state.is_in_soft_pity(rules),
            at_hard_pity: state.is_at_hard_pity(rules),
            at_featured_guarantee: state.is_at_featured_guarantee(rules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pity_core::PityCounters;

    #[test]
    fn report_for_a_mid_banner_snapshot() {
        let rules = Rules::default();
        let state = PityState::new(
            &rules,
            PityCounters {
                pulls_since_rare: 70,
                pulls_since_minor: 10,
                banner_pulls: 100,
                total_pulls: 250,
            },
        )
        .unwrap();

        let report = StateReport::compute(&rules, &state);
        assert_eq!(report.pity, 70);
        assert_eq!(report.spark, 100);
        assert_eq!(report.dupe, 240);
        assert_eq!(report.pulls_to_minor_guarantee, 10);
        assert_eq!(report.pulls_to_soft_pity, 0);
        assert_eq!(report.pulls_to_hard_pity, 10);
        assert_eq!(report.pulls_to_featured, 20);
        assert_eq!(report.pulls_to_bonus_repeat, 0);
        assert_eq!(report.pulls_to_free_pull, 0);
        assert!(report.in_soft_pity);
        assert!(!report.at_hard_pity);
        assert!(!report.at_featured_guarantee);
    }

    #[test]
    fn fresh_report_counts_down_every_milestone() {
        let rules = Rules::default();
        let report = StateReport::compute(&rules, &PityState::initial());
        assert_eq!(report.pulls_to_minor_guarantee, 10);
        assert_eq!(report.pulls_to_soft_pity, 65);
        assert_eq!(report.pulls_to_hard_pity, 80);
        assert_eq!(report.pulls_to_featured, 120);
        assert_eq!(report.pulls_to_bonus_repeat, 240);
        assert_eq!(report.pulls_to_free_pull, 60);
        assert!(!report.in_soft_pity);
    }
}
