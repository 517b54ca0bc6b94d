//! Application-level configuration.
//!
//! - [`WorkflowParams`]: completion dialog control (confirmation, rating)

pub mod workflow_params;

pub use workflow_params::WorkflowParams;
