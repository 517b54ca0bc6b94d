//! Presentation layer for minwon-desk
//!
//! This crate contains CLI definitions, console output, progress
//! reporters and the interactive completion dialog.

pub mod cli;
pub mod interaction;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, EditArgs, OutputFormat, SteerArgs};
pub use cli::edits::{EditError, apply_edits, apply_steer};
pub use interaction::InteractiveCompletionPrompt;
pub use output::ConsoleFormatter;
pub use progress::{SimpleProgress, SpinnerProgress};
