//! Application layer for minwon-desk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WorkflowParams;
pub use ports::{
    audit_logger::{AuditEvent, AuditLogger, NoAuditLogger},
    complaint_backend::{BackendError, ComplaintBackend},
    completion_prompt::{
        AutoConfirmCompletion, AutoDeclineCompletion, CompletionPrompt, PromptError,
    },
    progress::{NoProgress, WorkflowProgressNotifier},
};
pub use use_cases::reply_workflow::{
    CompletionOutcome, ComplaintView, ReplyWorkflowUseCase, WorkflowError,
};
