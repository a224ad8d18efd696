//! Caller-misuse errors for the pull simulator.

use crate::error::{ErrorSeverity, PityError};

/// Raised when a resolution is requested in a state that does not allow it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimulationError {
    /// The 50/50 only triggers at hard pity.
    #[error("50/50 only triggers at hard pity ({hard_pity}); current pity is {pulls_since_rare}")]
    NotAtHardPity { pulls_since_rare: u32, hard_pity: u32 },

    /// The featured guarantee is reached, so the 50/50 must be skipped.
    #[error("featured guarantee reached after {banner_pulls} banner pulls; the 50/50 does not apply")]
    FeaturedGuaranteeActive { banner_pulls: u32 },

    /// A guaranteed featured outcome was requested too early.
    #[error("featured guarantee needs {required} banner pulls; only {banner_pulls} made")]
    FeaturedGuaranteeNotReached { banner_pulls: u32, required: u32 },
}

impl PityError for SimulationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Precondition
    }

    fn error_code(&self) -> &'static str {
        use SimulationError::*;
        match self {
            NotAtHardPity { .. } => "SIM_NOT_AT_HARD_PITY",
            FeaturedGuaranteeActive { .. } => "SIM_FEATURED_GUARANTEE_ACTIVE",
            FeaturedGuaranteeNotReached { .. } => "SIM_FEATURED_GUARANTEE_NOT_REACHED",
        }
    }
}
