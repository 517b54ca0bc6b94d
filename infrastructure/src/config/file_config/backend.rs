//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the complaint service
    pub base_url: String,
    /// Client-level timeout for every request
    pub timeout_seconds: u64,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Bearer token; takes precedence over `token_env`
    pub token: Option<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            timeout_seconds: 30,
            token_env: "MINWON_TOKEN".to_string(),
            token: None,
        }
    }
}

impl FileBackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Resolve the bearer token: explicit value first, then `token_env`.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| std::env::var(&self.token_env).ok())
            .filter(|t| !t.trim().is_empty())
    }
}
