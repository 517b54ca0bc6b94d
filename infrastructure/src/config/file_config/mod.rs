//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod backend;
mod output;
mod workflow;

pub use audit::FileAuditConfig;
pub use backend::FileBackendConfig;
pub use output::FileOutputConfig;
pub use workflow::FileWorkflowConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Complaint service connection
    pub backend: FileBackendConfig,
    /// Completion dialog settings
    pub workflow: FileWorkflowConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit trail settings
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.backend.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        let base_url = self.backend.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        } else if reqwest::Url::parse(base_url).is_err() {
            issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        issues
    }
}
