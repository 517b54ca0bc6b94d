//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Decoding backend payloads and editing unknown ids are deliberately absent
/// here: those paths degrade to placeholders and no-ops instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quality rating must be between {min} and {max}, got {value}")]
    InvalidRating { value: i64, min: u8, max: u8 },

    #[error("Cannot {action} while the reply is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },

    #[error("No reply is being edited")]
    NoActiveSession,

    #[error("No draft candidates are available")]
    NoCandidates,

    #[error("Reply generation is already in progress")]
    GenerationInProgress,
}

impl DomainError {
    pub fn invalid_transition(action: &'static str, phase: &'static str) -> Self {
        DomainError::InvalidTransition { action, phase }
    }

    /// Check if retrying the same call later could succeed
    pub fn is_busy(&self) -> bool {
        matches!(self, DomainError::GenerationInProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_display() {
        let error = DomainError::InvalidRating {
            value: 7,
            min: 1,
            max: 3,
        };
        assert_eq!(
            error.to_string(),
            "Quality rating must be between 1 and 3, got 7"
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::invalid_transition("hold", "drafted");
        assert_eq!(error.to_string(), "Cannot hold while the reply is drafted");
    }

    #[test]
    fn test_is_busy_check() {
        assert!(DomainError::GenerationInProgress.is_busy());
        assert!(!DomainError::NoActiveSession.is_busy());
        assert!(!DomainError::NoCandidates.is_busy());
    }
}
