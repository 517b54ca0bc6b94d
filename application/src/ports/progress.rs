//! Progress notification port
//!
//! Defines the interface for reporting remote calls while a workflow
//! transition is in flight.

/// Callback for progress updates during workflow transitions
///
/// Implementations live in the presentation layer (spinner, plain log, ...).
pub trait WorkflowProgressNotifier: Send + Sync {
    /// Called before a remote call is issued
    fn on_call_start(&self, operation: &str);

    /// Called when a remote call resolves
    fn on_call_complete(&self, operation: &str, success: bool);

    /// Called when a finished call's result is dropped because the view closed
    fn on_result_discarded(&self, _operation: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl WorkflowProgressNotifier for NoProgress {
    fn on_call_start(&self, _operation: &str) {}
    fn on_call_complete(&self, _operation: &str, _success: bool) {}
}
