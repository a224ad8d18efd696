//! Common error infrastructure for pity-core.
//!
//! Domain-specific errors (`StateError`, `SimulationError`, `RulesError`,
//! `ProbabilityError`) live next to the types they guard. This module holds
//! the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized so callers can decide
//!   whether to re-prompt or reject
//! - **No Auto-Correction**: Engine errors are surfaced, never silently clamped

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: Inconsistent input data (out-of-bounds counters, bad rules)
/// - **Precondition**: Caller invoked an operation the current state does not allow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: pity counter above hard pity, total pulls below banner pulls
    Validation,

    /// Precondition error - the operation is not legal in the current state.
    ///
    /// Examples: tie-break requested below hard pity, featured outcome forced
    /// before the guarantee is reached
    Precondition,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Precondition => "precondition",
        }
    }

    /// Returns true if the error came from inconsistent data rather than
    /// from calling an operation at the wrong time.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all pity-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault, not by impact
pub trait PityError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Precondition.as_str(), "precondition");
        assert!(ErrorSeverity::Validation.is_validation());
        assert!(!ErrorSeverity::Precondition.is_validation());
    }
}
