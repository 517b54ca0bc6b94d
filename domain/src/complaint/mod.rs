//! Complaint record as stored by the backend

use crate::workflow::status::ReplyStatus;
use serde::{Deserialize, Serialize};

/// Backend identifier of a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(pub u64);

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ComplaintId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A civil complaint (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Gist of the complaint, produced by the backend summarizer
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub reply_status: ReplyStatus,
}
