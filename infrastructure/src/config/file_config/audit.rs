//! Audit trail configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw audit configuration. Auditing is off unless `path` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// JSONL file receiving workflow events
    pub path: Option<PathBuf>,
}
