//! Progress reporting for backend calls

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use minwon_application::WorkflowProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Reports backend calls with a spinner on stderr
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Human-readable name of a backend operation
    pub fn operation_display_name(operation: &str) -> &str {
        match operation {
            "fetch_complaint" => "Loading complaint",
            "fetch_candidates" => "Loading drafts",
            "fetch_review_points" => "Loading review points",
            "save_review_points" => "Saving review points",
            "generate" => "Generating drafts",
            "regenerate" => "Regenerating drafts",
            "persist_reply" => "Saving reply",
            "set_status" => "Updating status",
            "fetch_similar_history" => "Searching similar replies",
            other => other,
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowProgressNotifier for SpinnerProgress {
    fn on_call_start(&self, operation: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", Self::operation_display_name(operation)));
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn on_call_complete(&self, operation: &str, success: bool) {
        let name = Self::operation_display_name(operation);
        if let Some(pb) = self.spinner.lock().unwrap_or_else(|e| e.into_inner()).take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(format!("{} {} failed", "x".red(), name));
            }
        }
    }

    fn on_result_discarded(&self, operation: &str) {
        eprintln!(
            "{} {} finished after the complaint was closed; result ignored",
            "!".yellow(),
            Self::operation_display_name(operation)
        );
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl WorkflowProgressNotifier for SimpleProgress {
    fn on_call_start(&self, operation: &str) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            SpinnerProgress::operation_display_name(operation)
        );
    }

    fn on_call_complete(&self, operation: &str, success: bool) {
        let name = SpinnerProgress::operation_display_name(operation);
        if success {
            eprintln!("  {} {}", "v".green(), name);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display_names() {
        assert_eq!(
            SpinnerProgress::operation_display_name("regenerate"),
            "Regenerating drafts"
        );
        assert_eq!(
            SpinnerProgress::operation_display_name("something_else"),
            "something_else"
        );
    }

    #[test]
    fn test_spinner_lifecycle() {
        let progress = SpinnerProgress::new();
        progress.on_call_start("generate");
        progress.on_call_start("fetch_candidates");
        progress.on_call_complete("fetch_candidates", true);
        assert!(progress.spinner.lock().unwrap().is_none());
        progress.on_call_complete("fetch_candidates", true);
    }
}
