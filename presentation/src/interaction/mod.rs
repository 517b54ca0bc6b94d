//! Terminal dialogs for the blocking steps of the workflow

pub mod completion_prompt;

pub use completion_prompt::InteractiveCompletionPrompt;
