//! Complaint backend port
//!
//! Defines the remote operations the reply workflow consumes. The adapter
//! receives an already authenticated request capability; nothing behind this
//! trait reads credentials from ambient state.

use async_trait::async_trait;
use minwon_domain::{
    Complaint, ComplaintId, QualityRating, ReplyStatus, ReviewPoints, SimilarReply, WireReply,
};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during backend calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not decode response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Whether retrying the same call may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Status { status, .. } => *status >= 500,
            BackendError::Transport(_) => true,
            BackendError::Decode(_) => false,
        }
    }
}

/// Remote complaint service
///
/// Every method is one network round trip. Candidate payloads are returned
/// raw because their shape varies across backend revisions; decoding is the
/// transcoder's job.
#[async_trait]
pub trait ComplaintBackend: Send + Sync {
    async fn fetch_complaint(&self, id: ComplaintId) -> Result<Complaint, BackendError>;

    /// Zero or more candidate replies in wire form
    async fn fetch_candidates(&self, id: ComplaintId) -> Result<Vec<Value>, BackendError>;

    /// The `summary` field of the stored review points (JSON string or array)
    async fn fetch_review_points(&self, id: ComplaintId) -> Result<Value, BackendError>;

    async fn save_review_points(
        &self,
        id: ComplaintId,
        points: &ReviewPoints,
    ) -> Result<(), BackendError>;

    /// Trigger first generation. Candidates are fetched separately.
    async fn generate(&self, id: ComplaintId) -> Result<(), BackendError>;

    /// Trigger regeneration from the most recently saved review points
    async fn regenerate(&self, id: ComplaintId) -> Result<(), BackendError>;

    async fn persist_reply(&self, id: ComplaintId, reply: &WireReply) -> Result<(), BackendError>;

    async fn set_status(
        &self,
        id: ComplaintId,
        status: ReplyStatus,
        rating: Option<QualityRating>,
    ) -> Result<(), BackendError>;

    async fn fetch_similar_history(
        &self,
        id: ComplaintId,
    ) -> Result<Vec<SimilarReply>, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(BackendError::Transport("reset".into()).is_transient());
        assert!(
            BackendError::Status {
                status: 503,
                message: "busy".into()
            }
            .is_transient()
        );
        assert!(
            !BackendError::Status {
                status: 404,
                message: "missing".into()
            }
            .is_transient()
        );
        assert!(!BackendError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn test_status_display() {
        let error = BackendError::Status {
            status: 422,
            message: "bad body".into(),
        };
        assert_eq!(error.to_string(), "Backend returned 422: bad body");
    }
}
