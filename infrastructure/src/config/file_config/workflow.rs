//! Workflow configuration from TOML (`[workflow]` section)

use minwon_application::WorkflowParams;
use serde::{Deserialize, Serialize};

/// Raw completion dialog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowConfig {
    /// Ask before marking a reply completed
    pub confirm_completion: bool,
    /// Ask for a 1-3 quality rating on completion
    pub ask_rating: bool,
}

impl Default for FileWorkflowConfig {
    fn default() -> Self {
        Self {
            confirm_completion: true,
            ask_rating: true,
        }
    }
}

impl FileWorkflowConfig {
    pub fn to_params(&self) -> WorkflowParams {
        WorkflowParams::default()
            .with_confirm_completion(self.confirm_completion)
            .with_ask_rating(self.ask_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_params() {
        let config = FileWorkflowConfig {
            confirm_completion: false,
            ask_rating: true,
        };
        let params = config.to_params();
        assert!(!params.confirm_completion);
        assert!(params.ask_rating);
    }
}
