//! Completion prompt port
//!
//! Completing a reply blocks on the user twice: once to confirm, then once
//! for an optional quality rating.
//!
//! # Flow
//!
//! ```text
//! complete requested
//!        ↓
//! CompletionPrompt::confirm_completion()  ── false ──▶ abort, state unchanged
//!        ↓ true
//! CompletionPrompt::request_rating()      ── None ───▶ complete without rating
//!        ↓ Some(rating)
//! persist reply + status "completed" with rating
//! ```
//!
//! # Built-in Implementations
//!
//! - [`AutoConfirmCompletion`] - confirms, answers the rating with a fixed value
//! - [`AutoDeclineCompletion`] - always declines
//!
//! For interactive use, see `InteractiveCompletionPrompt` in the presentation layer.

use async_trait::async_trait;
use minwon_domain::{Answer, QualityRating};
use thiserror::Error;

/// Failures while prompting, as opposed to the user's answers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Prompt cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for the blocking completion dialog
#[async_trait]
pub trait CompletionPrompt: Send + Sync {
    /// Ask whether `answer` should be marked completed.
    async fn confirm_completion(&self, answer: &Answer) -> Result<bool, PromptError>;

    /// Ask for a quality rating. `None` means the user chose to rate later.
    async fn request_rating(&self) -> Result<Option<QualityRating>, PromptError>;
}

/// Confirms every completion and answers the rating with `rating`.
pub struct AutoConfirmCompletion {
    rating: Option<QualityRating>,
}

impl AutoConfirmCompletion {
    pub fn new(rating: Option<QualityRating>) -> Self {
        Self { rating }
    }
}

#[async_trait]
impl CompletionPrompt for AutoConfirmCompletion {
    async fn confirm_completion(&self, _answer: &Answer) -> Result<bool, PromptError> {
        Ok(true)
    }

    async fn request_rating(&self) -> Result<Option<QualityRating>, PromptError> {
        Ok(self.rating)
    }
}

/// Declines every completion.
pub struct AutoDeclineCompletion;

#[async_trait]
impl CompletionPrompt for AutoDeclineCompletion {
    async fn confirm_completion(&self, _answer: &Answer) -> Result<bool, PromptError> {
        Ok(false)
    }

    async fn request_rating(&self) -> Result<Option<QualityRating>, PromptError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_confirm() {
        let rating = QualityRating::new(3).unwrap();
        let prompt = AutoConfirmCompletion::new(Some(rating));
        assert!(prompt.confirm_completion(&Answer::default()).await.unwrap());
        assert_eq!(prompt.request_rating().await.unwrap(), Some(rating));
    }

    #[tokio::test]
    async fn test_auto_decline() {
        let prompt = AutoDeclineCompletion;
        assert!(!prompt.confirm_completion(&Answer::default()).await.unwrap());
        assert_eq!(prompt.request_rating().await.unwrap(), None);
    }
}
