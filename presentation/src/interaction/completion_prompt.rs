//! Interactive completion dialog.
//!
//! Completing a reply shows the final text and asks two questions:
//!
//! ```text
//! ═══════════════════════════════════════════════════════════════
//!   Complete this reply?
//! ═══════════════════════════════════════════════════════════════
//!
//! 1. Hello
//! ...
//!
//! Mark as completed? [y/N]
//! Rate this draft 1-3 (Enter to rate later):
//! ```

use crate::output::ConsoleFormatter;
use async_trait::async_trait;
use colored::Colorize;
use minwon_application::{CompletionPrompt, PromptError};
use minwon_domain::{Answer, QualityRating};
use std::io::{self, Write};

/// Terminal implementation of [`CompletionPrompt`]
pub struct InteractiveCompletionPrompt {
    preset_rating: Option<QualityRating>,
}

impl InteractiveCompletionPrompt {
    pub fn new() -> Self {
        Self {
            preset_rating: None,
        }
    }

    /// Answer the rating question with `rating` instead of asking
    pub fn with_preset_rating(mut self, rating: Option<QualityRating>) -> Self {
        self.preset_rating = rating;
        self
    }

    fn display_preview(&self, answer: &Answer) {
        let banner = "═══════════════════════════════════════════════════════════════"
            .green()
            .bold();
        println!();
        println!("{}", banner);
        println!("{}", "  Complete this reply?".green().bold());
        println!("{}", banner);
        println!();
        println!("{}", ConsoleFormatter::format_text(answer));
        println!();
    }

    fn read_line(&self, prompt: &str) -> Result<String, PromptError> {
        print!("{} ", prompt.magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| PromptError::Io(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .map_err(|e| PromptError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(input.trim().to_string())
    }
}

impl Default for InteractiveCompletionPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a yes/no answer. Empty input means no; `None` means unrecognized.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "" | "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a rating answer. Empty input means rate later.
pub fn parse_rating(input: &str) -> Result<Option<QualityRating>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let value: i64 = input
        .parse()
        .map_err(|_| format!("'{}' is not a number", input))?;
    QualityRating::new(value).map(Some).map_err(|e| e.to_string())
}

#[async_trait]
impl CompletionPrompt for InteractiveCompletionPrompt {
    async fn confirm_completion(&self, answer: &Answer) -> Result<bool, PromptError> {
        self.display_preview(answer);

        loop {
            let input = self.read_line("Mark as completed? [y/N]")?;
            match parse_confirmation(&input) {
                Some(confirmed) => return Ok(confirmed),
                None => println!("{} Please answer y or n.", "⚠️".yellow()),
            }
        }
    }

    async fn request_rating(&self) -> Result<Option<QualityRating>, PromptError> {
        if let Some(rating) = self.preset_rating {
            return Ok(Some(rating));
        }

        loop {
            let input = self.read_line("Rate this draft 1-3 (Enter to rate later):")?;
            match parse_rating(&input) {
                Ok(rating) => return Ok(rating),
                Err(e) => println!("{} {}", "⚠️".yellow(), e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(parse_confirmation("Y"), Some(true));
        assert_eq!(parse_confirmation(" yes "), Some(true));
        assert_eq!(parse_confirmation(""), Some(false));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(""), Ok(None));
        assert_eq!(parse_rating(" 3 "), Ok(Some(QualityRating::new(3).unwrap())));
        assert!(parse_rating("4").is_err());
        assert!(parse_rating("three").is_err());
    }

    #[tokio::test]
    async fn test_preset_rating_skips_question() {
        let rating = QualityRating::new(2).unwrap();
        let prompt = InteractiveCompletionPrompt::new().with_preset_rating(Some(rating));
        assert_eq!(prompt.request_rating().await, Ok(Some(rating)));
    }
}
