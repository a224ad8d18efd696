//! Pity state validation errors.

use crate::error::{ErrorSeverity, PityError};

/// Invariant violations detected while constructing a [`super::PityState`].
///
/// Construction never clamps; out-of-bounds counters are always rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Rare pity counter is above hard pity.
    #[error("pulls since rare ({value}) cannot exceed hard pity ({max})")]
    RarePityOutOfBounds { value: u32, max: u32 },

    /// Minor pity counter is above the minor guarantee window.
    #[error("pulls since minor ({value}) cannot exceed the minor guarantee window ({max})")]
    MinorPityOutOfBounds { value: u32, max: u32 },

    /// Lifetime pulls are fewer than pulls on the current banner.
    #[error("total pulls ({total_pulls}) cannot be less than banner pulls ({banner_pulls})")]
    TotalBelowBanner { total_pulls: u32, banner_pulls: u32 },
}

impl PityError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            RarePityOutOfBounds { .. } => "STATE_RARE_PITY_OUT_OF_BOUNDS",
            MinorPityOutOfBounds { .. } => "STATE_MINOR_PITY_OUT_OF_BOUNDS",
            TotalBelowBanner { .. } => "STATE_TOTAL_BELOW_BANNER",
        }
    }
}
