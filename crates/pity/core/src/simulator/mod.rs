//! Outcome resolution for the 50/50 and folding outcomes into state.
//!
//! Eligibility rules at hard pity:
//!
//! ```text
//! banner_pulls >= featured_guarantee  ->  featured, no randomness
//! otherwise                           ->  50/50: featured on a win,
//!                                         else roll prior-limited-1 / -2 / standard
//! ```
//!
//! [`PullSimulator::resolve_tie_break`] is the raw resolution and trusts the
//! caller. The state-aware entry points reject calls made in the wrong state.
mod error;
mod outcome;

pub use error::SimulationError;
pub use outcome::{PullOutcome, Rarity, Variant};

use crate::env::RandomSource;
use crate::rules::Rules;
use crate::state::PityState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PullSimulator {
    rules: Rules,
}

impl PullSimulator {
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Resolves a 50/50 given whether it was won.
    ///
    /// A win never consults `rng`. A loss draws exactly one sample:
    /// `[0, p)` is prior-limited-1, `[p, 2p)` prior-limited-2, the rest
    /// standard.
    pub fn resolve_tie_break<R>(&self, won: bool, rng: &mut R) -> PullOutcome
    where
        R: RandomSource + ?Sized,
    {
        if won {
            return PullOutcome::featured_win();
        }

        let roll = rng.sample();
        let p = self.rules.prior_variant_probability;
        let variant = if roll < p {
            Variant::PriorLimited1
        } else if roll < p * 2.0 {
            Variant::PriorLimited2
        } else {
            Variant::Standard
        };

        PullOutcome::tie_break_loss(variant)
    }

    /// Resolves a 50/50 after checking the state allows one.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::NotAtHardPity`] below hard pity
    /// - [`SimulationError::FeaturedGuaranteeActive`] once the featured
    ///   guarantee is reached; use [`Self::force_featured`] instead
    pub fn tie_break<R>(
        &self,
        state: &PityState,
        won: bool,
        rng: &mut R,
    ) -> Result<PullOutcome, SimulationError>
    where
        R: RandomSource + ?Sized,
    {
        self.ensure_hard_pity(state)?;
        if state.is_at_featured_guarantee(&self.rules) {
            return Err(SimulationError::FeaturedGuaranteeActive {
                banner_pulls: state.banner_pulls(),
            });
        }
        Ok(self.resolve_tie_break(won, rng))
    }

    /// Grants the featured rare through the banner guarantee.
    ///
    /// # Errors
    ///
    /// [`SimulationError::FeaturedGuaranteeNotReached`] before the guarantee.
    pub fn force_featured(&self, state: &PityState) -> Result<PullOutcome, SimulationError> {
        if !state.is_at_featured_guarantee(&self.rules) {
            return Err(SimulationError::FeaturedGuaranteeNotReached {
                banner_pulls: state.banner_pulls(),
                required: self.rules.featured_guarantee,
            });
        }
        Ok(PullOutcome::guaranteed_featured())
    }

    /// Resolves the rare draw at hard pity, forcing the featured variant when
    /// the guarantee is reached and running the 50/50 otherwise.
    ///
    /// # Errors
    ///
    /// [`SimulationError::NotAtHardPity`] below hard pity.
    pub fn resolve_at_hard_pity<R>(
        &self,
        state: &PityState,
        won: bool,
        rng: &mut R,
    ) -> Result<PullOutcome, SimulationError>
    where
        R: RandomSource + ?Sized,
    {
        self.ensure_hard_pity(state)?;
        if state.is_at_featured_guarantee(&self.rules) {
            self.force_featured(state)
        } else {
            self.tie_break(state, won, rng)
        }
    }

    /// Folds an outcome into a new snapshot.
    ///
    /// Always counts the pull first. Rare resets both pity counters, minor
    /// resets only the minor counter. Banner pulls are never reset here.
    pub fn apply_outcome(&self, state: &PityState, outcome: &PullOutcome) -> PityState {
        let mut next = state.increment_pull(&self.rules);

        match outcome.rarity {
            Rarity::Rare => {
                next = next.reset_rare_pity().reset_minor_pity();
            }
            Rarity::Minor => {
                next = next.reset_minor_pity();
            }
            Rarity::Common => {}
        }

        next
    }

    fn ensure_hard_pity(&self, state: &PityState) -> Result<(), SimulationError> {
        if state.is_at_hard_pity(&self.rules) {
            Ok(())
        } else {
            Err(SimulationError::NotAtHardPity {
                pulls_since_rare: state.pulls_since_rare(),
                hard_pity: self.rules.hard_pity,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedSource;
    use crate::error::{ErrorSeverity, PityError};
    use crate::state::PityCounters;

    fn simulator() -> PullSimulator {
        PullSimulator::new(Rules::default())
    }

    fn state(rare: u32, minor: u32, banner: u32, total: u32) -> PityState {
        PityState::new(
            &Rules::default(),
            PityCounters {
                pulls_since_rare: rare,
                pulls_since_minor: minor,
                banner_pulls: banner,
                total_pulls: total,
            },
        )
        .unwrap()
    }

    #[test]
    fn win_is_featured_without_sampling() {
        let mut rng = ScriptedSource::new([0.99]);
        let outcome = simulator().resolve_tie_break(true, &mut rng);
        assert_eq!(outcome, PullOutcome::featured_win());
        assert_eq!(outcome.tie_break_won, Some(true));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn loss_below_prior_probability_is_first_prior_limited() {
        let mut rng = ScriptedSource::new([0.10]);
        let outcome = simulator().resolve_tie_break(false, &mut rng);
        assert_eq!(outcome.variant, Variant::PriorLimited1);
        assert_eq!(outcome.rarity, Rarity::Rare);
        assert_eq!(outcome.tie_break_won, Some(false));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn loss_in_second_band_is_second_prior_limited() {
        let mut rng = ScriptedSource::new([0.1428, 0.2855]);
        let simulator = simulator();
        assert_eq!(
            simulator.resolve_tie_break(false, &mut rng).variant,
            Variant::PriorLimited2
        );
        assert_eq!(
            simulator.resolve_tie_break(false, &mut rng).variant,
            Variant::PriorLimited2
        );
    }

    #[test]
    fn loss_above_both_bands_is_standard() {
        let mut rng = ScriptedSource::new([0.50, 0.2857, 0.999]);
        let simulator = simulator();
        for _ in 0..3 {
            assert_eq!(
                simulator.resolve_tie_break(false, &mut rng).variant,
                Variant::Standard
            );
        }
    }

    #[test]
    fn tie_break_rejected_below_hard_pity() {
        let mut rng = ScriptedSource::new([0.5]);
        let err = simulator()
            .tie_break(&state(79, 0, 79, 79), false, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::NotAtHardPity {
                pulls_since_rare: 79,
                hard_pity: 80,
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Precondition);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn tie_break_rejected_once_featured_guarantee_reached() {
        let mut rng = ScriptedSource::new([0.5]);
        let err = simulator()
            .tie_break(&state(80, 0, 120, 200), false, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::FeaturedGuaranteeActive { banner_pulls: 120 }
        );
        assert_eq!(err.error_code(), "SIM_FEATURED_GUARANTEE_ACTIVE");
    }

    #[test]
    fn tie_break_at_hard_pity_uses_the_sample() {
        let mut rng = ScriptedSource::new([0.10]);
        let outcome = simulator()
            .tie_break(&state(80, 3, 80, 80), false, &mut rng)
            .unwrap();
        assert_eq!(outcome.variant, Variant::PriorLimited1);
    }

    #[test]
    fn force_featured_requires_the_guarantee() {
        let simulator = simulator();
        assert_eq!(
            simulator.force_featured(&state(80, 0, 119, 119)),
            Err(SimulationError::FeaturedGuaranteeNotReached {
                banner_pulls: 119,
                required: 120,
            })
        );
        assert_eq!(
            simulator.force_featured(&state(40, 0, 120, 120)),
            Ok(PullOutcome::guaranteed_featured())
        );
    }

    #[test]
    fn hard_pity_dispatch_forces_featured_without_sampling() {
        let mut rng = ScriptedSource::new([0.0]);
        let outcome = simulator()
            .resolve_at_hard_pity(&state(80, 0, 130, 130), false, &mut rng)
            .unwrap();
        assert_eq!(outcome, PullOutcome::guaranteed_featured());
        assert_eq!(outcome.tie_break_won, None);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn hard_pity_dispatch_rejects_low_pity() {
        let mut rng = ScriptedSource::new([0.0]);
        assert!(matches!(
            simulator().resolve_at_hard_pity(&state(10, 0, 130, 130), true, &mut rng),
            Err(SimulationError::NotAtHardPity { .. })
        ));
    }

    #[test]
    fn rare_outcome_resets_both_pity_counters() {
        let simulator = simulator();
        for before in [state(0, 0, 0, 0), state(45, 6, 45, 45), state(80, 10, 80, 80)] {
            let after = simulator.apply_outcome(&before, &PullOutcome::featured_win());
            assert_eq!(after.pulls_since_rare(), 0);
            assert_eq!(after.pulls_since_minor(), 0);
            assert_eq!(after.banner_pulls(), before.banner_pulls() + 1);
            assert_eq!(after.total_pulls(), before.total_pulls() + 1);
        }
    }

    #[test]
    fn minor_outcome_resets_only_minor_pity() {
        let after = simulator().apply_outcome(&state(30, 9, 30, 30), &PullOutcome::minor());
        assert_eq!(after.pulls_since_rare(), 31);
        assert_eq!(after.pulls_since_minor(), 0);
    }

    #[test]
    fn common_outcome_only_counts_the_pull() {
        let after = simulator().apply_outcome(&state(30, 4, 30, 30), &PullOutcome::common());
        assert_eq!(after.pulls_since_rare(), 31);
        assert_eq!(after.pulls_since_minor(), 5);
        assert_eq!(after.banner_pulls(), 31);
    }

    #[test]
    fn apply_never_resets_banner_pulls() {
        let after = simulator().apply_outcome(
            &state(80, 0, 150, 300),
            &PullOutcome::guaranteed_featured(),
        );
        assert_eq!(after.banner_pulls(), 151);
        assert_eq!(after.total_pulls(), 301);
    }
}
