//! Workflow parameters: completion dialog control.
//!
//! [`WorkflowParams`] groups the switches that shape the completion step of
//! [`ReplyWorkflowUseCase`](crate::use_cases::reply_workflow::ReplyWorkflowUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Completion dialog parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowParams {
    /// Ask the user to confirm before completing a reply.
    pub confirm_completion: bool,
    /// Ask for a quality rating after confirmation.
    pub ask_rating: bool,
}

impl Default for WorkflowParams {
    fn default() -> Self {
        Self {
            confirm_completion: true,
            ask_rating: true,
        }
    }
}

impl WorkflowParams {
    pub fn with_confirm_completion(mut self, confirm: bool) -> Self {
        self.confirm_completion = confirm;
        self
    }

    pub fn with_ask_rating(mut self, ask: bool) -> Self {
        self.ask_rating = ask;
        self
    }
}
