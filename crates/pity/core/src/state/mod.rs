//! Player progress snapshot and its transitions.
//!
//! A [`PityState`] is validated once at construction and never mutated.
//! Every transition returns a new snapshot; clamping happens only inside
//! [`PityState::increment_pull`].
mod error;

pub use error::StateError;

use crate::rules::Rules;

/// The four raw counters, as entered by a player or read from storage.
///
/// This is the entire persistence payload. It carries no invariants of its
/// own; turn it into a [`PityState`] with [`PityState::new`]. When
/// deserialized, missing fields read as zero and the older tier-named keys
/// are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PityCounters {
    /// Pulls since the last rare-tier draw.
    #[cfg_attr(feature = "serde", serde(alias = "pulls_without_6_star"))]
    pub pulls_since_rare: u32,
    /// Pulls since the last minor-tier (or better) draw.
    #[cfg_attr(feature = "serde", serde(alias = "pulls_without_5_star"))]
    pub pulls_since_minor: u32,
    /// Pulls on the current banner.
    pub banner_pulls: u32,
    /// Lifetime pulls across banners.
    pub total_pulls: u32,
}

/// Validated progress snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PityState {
    counters: PityCounters,
}

impl PityState {
    /// Validates raw counters against the rule set.
    ///
    /// # Errors
    ///
    /// - [`StateError::RarePityOutOfBounds`] if `pulls_since_rare > hard_pity`
    /// - [`StateError::MinorPityOutOfBounds`] if `pulls_since_minor > minor_guarantee_window`
    /// - [`StateError::TotalBelowBanner`] if `total_pulls < banner_pulls`
    pub fn new(rules: &Rules, counters: PityCounters) -> Result<Self, StateError> {
        if counters.pulls_since_rare > rules.hard_pity {
            return Err(StateError::RarePityOutOfBounds {
                value: counters.pulls_since_rare,
                max: rules.hard_pity,
            });
        }
        if counters.pulls_since_minor > rules.minor_guarantee_window {
            return Err(StateError::MinorPityOutOfBounds {
                value: counters.pulls_since_minor,
                max: rules.minor_guarantee_window,
            });
        }
        if counters.total_pulls < counters.banner_pulls {
            return Err(StateError::TotalBelowBanner {
                total_pulls: counters.total_pulls,
                banner_pulls: counters.banner_pulls,
            });
        }

        Ok(Self { counters })
    }

    /// Fresh state with every counter at zero.
    pub const fn initial() -> Self {
        Self {
            counters: PityCounters {
                pulls_since_rare: 0,
                pulls_since_minor: 0,
                banner_pulls: 0,
                total_pulls: 0,
            },
        }
    }

    pub const fn counters(&self) -> PityCounters {
        self.counters
    }

    pub const fn pulls_since_rare(&self) -> u32 {
        self.counters.pulls_since_rare
    }

    pub const fn pulls_since_minor(&self) -> u32 {
        self.counters.pulls_since_minor
    }

    pub const fn banner_pulls(&self) -> u32 {
        self.counters.banner_pulls
    }

    pub const fn total_pulls(&self) -> u32 {
        self.counters.total_pulls
    }

    // ===== transitions =====

    /// Counts one pull that did not hit any pity.
    ///
    /// Pity counters saturate at their thresholds; banner and lifetime
    /// counters grow without bound.
    #[must_use]
    pub fn increment_pull(&self, rules: &Rules) -> Self {
        let c = self.counters;
        Self {
            counters: PityCounters {
                pulls_since_rare: c.pulls_since_rare.saturating_add(1).min(rules.hard_pity),
                pulls_since_minor: c
                    .pulls_since_minor
                    .saturating_add(1)
                    .min(rules.minor_guarantee_window),
                banner_pulls: c.banner_pulls.saturating_add(1),
                total_pulls: c.total_pulls.saturating_add(1),
            },
        }
    }

    #[must_use]
    pub fn reset_rare_pity(&self) -> Self {
        Self {
            counters: PityCounters {
                pulls_since_rare: 0,
                ..self.counters
            },
        }
    }

    #[must_use]
    pub fn reset_minor_pity(&self) -> Self {
        Self {
            counters: PityCounters {
                pulls_since_minor: 0,
                ..self.counters
            },
        }
    }

    // ===== predicates =====

    pub fn is_at_hard_pity(&self, rules: &Rules) -> bool {
        self.counters.pulls_since_rare >= rules.hard_pity
    }

    pub fn is_in_soft_pity(&self, rules: &Rules) -> bool {
        self.counters.pulls_since_rare >= rules.soft_pity_start
    }

    pub fn is_at_featured_guarantee(&self, rules: &Rules) -> bool {
        self.counters.banner_pulls >= rules.featured_guarantee
    }

    pub fn is_at_minor_guarantee(&self, rules: &Rules) -> bool {
        self.counters.pulls_since_minor >= rules.minor_guarantee_window
    }
}
