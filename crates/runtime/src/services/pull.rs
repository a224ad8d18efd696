//! Resolving pulls and persisting the resulting snapshot.

use pity_core::{PityState, PullOutcome, PullSimulator, RandomSource, Rules, Variant};

use super::{Result, ServiceError};
use crate::repository::StateRepository;

/// Result of a simulated rare draw at hard pity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub outcome: PullOutcome,
    /// Player-facing summary of the outcome.
    pub message: String,
    /// Snapshot after the outcome, already saved.
    pub state: PityState,
}

/// Applies pull outcomes and saves every resulting snapshot.
pub struct PullService<R: StateRepository> {
    simulator: PullSimulator,
    repository: R,
}

impl<R: StateRepository> PullService<R> {
    pub fn new(rules: Rules, repository: R) -> Self {
        Self {
            simulator: PullSimulator::new(rules),
            repository,
        }
    }

    pub fn rules(&self) -> &Rules {
        self.simulator.rules()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Resolves the rare draw at hard pity, applies it, and saves.
    ///
    /// With the featured guarantee reached the outcome is forced and `won`
    /// is ignored. Nothing is saved when resolution is rejected.
    pub fn simulate<G>(&self, state: &PityState, won: bool, rng: &mut G) -> Result<SimulationReport>
    where
        G: RandomSource + ?Sized,
    {
        let outcome = self.simulator.resolve_at_hard_pity(state, won, rng)?;
        let next = self.simulator.apply_outcome(state, &outcome);
        self.repository.save(&next)?;

        tracing::info!(
            variant = %outcome.variant,
            tie_break_won = ?outcome.tie_break_won,
            banner_pulls = next.banner_pulls(),
            "Resolved rare draw at hard pity"
        );

        Ok(SimulationReport {
            message: self.describe(&outcome),
            outcome,
            state: next,
        })
    }

    /// Records a minor or common pull and saves.
    ///
    /// # Errors
    ///
    /// [`ServiceError::RareNotRecordable`] for a rare outcome; those only
    /// come out of [`Self::simulate`].
    pub fn record(&self, state: &PityState, outcome: &PullOutcome) -> Result<PityState> {
        if outcome.is_rare() {
            return Err(ServiceError::RareNotRecordable(outcome.rarity));
        }

        let next = self.simulator.apply_outcome(state, outcome);
        self.repository.save(&next)?;

        tracing::info!(
            rarity = %outcome.rarity,
            pulls_since_rare = next.pulls_since_rare(),
            pulls_since_minor = next.pulls_since_minor(),
            "Recorded pull"
        );

        Ok(next)
    }

    fn describe(&self, outcome: &PullOutcome) -> String {
        match (outcome.tie_break_won, outcome.variant) {
            (None, _) => "Featured guarantee reached. You got the featured rare.".to_string(),
            (Some(true), _) => "You won the 50/50! You got the featured rare.".to_string(),
            (Some(false), variant) => {
                let prize = match variant {
                    Variant::PriorLimited1 => "the 1st prior limited rare",
                    Variant::PriorLimited2 => "the 2nd prior limited rare",
                    _ => "a standard rare",
                };
                format!(
                    "You lost the 50/50. You got {prize}.\n  No featured guarantee until banner pull {}.",
                    self.rules().featured_guarantee
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStateRepo;
    use pity_core::{PityCounters, Rarity, ScriptedSource, SimulationError};

    fn service() -> PullService<InMemoryStateRepo> {
        PullService::new(Rules::default(), InMemoryStateRepo::new())
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
    fn won_tie_break_resets_pity_and_saves() {
        let service = service();
        let mut rng = ScriptedSource::new([0.9]);
        let report = service
            .simulate(&state(80, 4, 80, 80), true, &mut rng)
            .unwrap();

        assert_eq!(report.outcome, PullOutcome::featured_win());
        assert_eq!(report.state.pulls_since_rare(), 0);
        assert_eq!(report.state.pulls_since_minor(), 0);
        assert_eq!(report.state.banner_pulls(), 81);
        assert!(report.message.contains("won the 50/50"));
        assert_eq!(service.repository().load().unwrap(), Some(report.state));
    }

    #[test]
    fn lost_tie_break_names_the_variant() {
        let service = service();
        let mut rng = ScriptedSource::new([0.2]);
        let report = service
            .simulate(&state(80, 0, 80, 80), false, &mut rng)
            .unwrap();

        assert_eq!(report.outcome.variant, Variant::PriorLimited2);
        assert!(report.message.contains("2nd prior limited"));
        assert!(report.message.contains("120"));
    }

    #[test]
    fn guarantee_forces_featured_even_when_lost() {
        let service = service();
        let mut rng = ScriptedSource::new([0.0]);
        let report = service
            .simulate(&state(80, 0, 125, 125), false, &mut rng)
            .unwrap();

        assert_eq!(report.outcome, PullOutcome::guaranteed_featured());
        assert!(report.message.contains("guarantee"));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn rejected_simulation_saves_nothing() {
        let service = service();
        let mut rng = ScriptedSource::new([0.0]);
        let err = service
            .simulate(&state(50, 0, 50, 50), true, &mut rng)
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Simulation(SimulationError::NotAtHardPity { .. })
        ));
        assert_eq!(err.severity(), Some(pity_core::ErrorSeverity::Precondition));
        assert!(!service.repository().exists());
    }

    #[test]
    fn record_applies_minor_and_common_pulls() {
        let service = service();
        let after_common = service
            .record(&state(10, 5, 10, 10), &PullOutcome::common())
            .unwrap();
        assert_eq!(after_common.pulls_since_rare(), 11);
        assert_eq!(after_common.pulls_since_minor(), 6);

        let after_minor = service.record(&after_common, &PullOutcome::minor()).unwrap();
        assert_eq!(after_minor.pulls_since_rare(), 12);
        assert_eq!(after_minor.pulls_since_minor(), 0);
        assert_eq!(service.repository().load().unwrap(), Some(after_minor));
    }

    #[test]
    fn record_rejects_rare_outcomes() {
        let service = service();
        assert!(matches!(
            service.record(&PityState::initial(), &PullOutcome::featured_win()),
            Err(ServiceError::RareNotRecordable(Rarity::Rare))
        ));
    }
}
