//! On-disk document for the persisted progress record.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "timestamp": "2026-01-01T12:00:00+00:00",
//!   "state": {
//!     "pulls_since_rare": 42,
//!     "pulls_since_minor": 3,
//!     "banner_pulls": 42,
//!     "total_pulls": 130
//!   }
//! }
//! ```

use pity_core::{PityCounters, PityState, Rules};
use serde::{Deserialize, Serialize};

use super::Result;

/// Versioned wrapper written by the file repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(default = "StateRecord::current_version")]
    pub version: String,

    /// RFC 3339 time of the save. Informational only.
    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub state: PityCounters,
}

impl StateRecord {
    pub const VERSION: &'static str = "1.0";

    fn current_version() -> String {
        Self::VERSION.to_string()
    }

    /// Wrap a snapshot, stamping it with the current UTC time.
    pub fn new(state: &PityState) -> Self {
        Self {
            version: Self::current_version(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            state: state.counters(),
        }
    }

    /// Rebuild the snapshot, re-checking every bound.
    pub fn into_state(self, rules: &Rules) -> Result<PityState> {
        Ok(PityState::new(rules, self.state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;

    #[test]
    fn legacy_keys_and_missing_fields_are_accepted() {
        let json = r#"{
            "version": "1.0",
            "timestamp": "2025-03-01T10:00:00",
            "state": { "pulls_without_6_star": 12, "pulls_without_5_star": 4 }
        }"#;
        let record: StateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.state,
            PityCounters {
                pulls_since_rare: 12,
                pulls_since_minor: 4,
                banner_pulls: 0,
                total_pulls: 0,
            }
        );
    }

    #[test]
    fn empty_document_is_the_initial_state() {
        let record: StateRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.version, StateRecord::VERSION);
        let state = record.into_state(&Rules::default()).unwrap();
        assert_eq!(state, PityState::initial());
    }

    #[test]
    fn out_of_bounds_counters_fail_validation() {
        let json = r#"{ "state": { "pulls_since_rare": 95 } }"#;
        let record: StateRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(
            record.into_state(&Rules::default()),
            Err(RepositoryError::InvalidState(_))
        ));
    }

    #[test]
    fn new_record_carries_version_and_timestamp() {
        let record = StateRecord::new(&PityState::initial());
        assert_eq!(record.version, "1.0");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }

    #[test]
    fn stored_probabilities_are_bounds_checked() {
        let p: pity_core::Probability = serde_json::from_str("0.058").unwrap();
        assert_eq!(p.value(), 0.058);
        assert!(serde_json::from_str::<pity_core::Probability>("2.5").is_err());
        assert!(serde_json::from_str::<pity_core::Probability>("-0.1").is_err());
        assert_eq!(serde_json::to_string(&p).unwrap(), "0.058");
    }
}
