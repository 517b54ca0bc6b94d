//! Infrastructure layer for minwon-desk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::HttpComplaintBackend;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAuditConfig, FileBackendConfig, FileConfig,
    FileOutputConfig, FileWorkflowConfig,
};
pub use logging::JsonlAuditLogger;
