//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with external systems via ports.

pub mod reply_workflow;
