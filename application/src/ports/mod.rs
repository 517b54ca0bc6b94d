//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod audit_logger;
pub mod complaint_backend;
pub mod completion_prompt;
pub mod progress;
