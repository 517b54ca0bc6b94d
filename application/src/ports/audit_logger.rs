//! Port for the structured audit trail.
//!
//! Defines the [`AuditLogger`] trait for recording workflow outcomes
//! (drafts loaded, review points saved, reply held or completed) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures what happened to
//! each complaint in a format other tools can consume (JSONL).

use minwon_domain::{ComplaintId, QualityRating};
use serde_json::{Value, json};

/// A structured audit event.
///
/// Each event has a type string and a JSON payload; adapters add the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    /// Event type identifier (e.g., "drafts_loaded", "reply_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn drafts_loaded(id: ComplaintId, count: usize, regenerated: bool) -> Self {
        Self::new(
            "drafts_loaded",
            json!({ "complaint_id": id, "count": count, "regenerated": regenerated }),
        )
    }

    pub fn review_points_saved(id: ComplaintId, points: usize) -> Self {
        Self::new(
            "review_points_saved",
            json!({ "complaint_id": id, "points": points }),
        )
    }

    pub fn reply_held(id: ComplaintId, blocks: usize) -> Self {
        Self::new("reply_held", json!({ "complaint_id": id, "blocks": blocks }))
    }

    pub fn reply_completed(id: ComplaintId, blocks: usize, rating: Option<QualityRating>) -> Self {
        Self::new(
            "reply_completed",
            json!({ "complaint_id": id, "blocks": blocks, "rating": rating }),
        )
    }
}

/// Port for logging audit events.
///
/// `log` is synchronous and infallible; adapters swallow write failures so
/// the audit trail never blocks a workflow transition.
pub trait AuditLogger: Send + Sync {
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
