//! Console output for complaints, drafts and review points

use colored::Colorize;
use minwon_domain::{
    Answer, Complaint, DraftView, HistorySeed, OutputFormat, ReplyWorkflow, ReviewPoints,
    encode_value, to_plain_text,
};
use serde_json::json;

/// Formats workflow state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything printed afterwards
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Format a complaint with its current draft in the requested format
    pub fn format_view(complaint: &Complaint, workflow: &ReplyWorkflow, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_full(complaint, workflow),
            OutputFormat::Text => match workflow.visible_answer() {
                Some(answer) => Self::format_text(answer),
                None => Self::no_drafts(),
            },
            OutputFormat::Json => Self::format_view_json(complaint, workflow),
        }
    }

    /// Sectioned view: complaint, phase, review points and the displayed draft
    pub fn format_full(complaint: &Complaint, workflow: &ReplyWorkflow) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Complaint #{}", complaint.id)));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Title:".cyan().bold(), complaint.title));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Phase:".cyan().bold(),
            workflow.phase().as_str().yellow(),
            complaint.reply_status.as_label()
        ));
        if let Some(summary) = complaint.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            output.push_str(&format!("{} {}\n", "Gist:".cyan().bold(), summary));
        }
        if !complaint.content.trim().is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                Self::indent(complaint.content.trim(), "  ").dimmed()
            ));
        }

        output.push_str(&Self::section_header("Review Points"));
        output.push_str(&Self::format_review_points(workflow.review_points()));

        match workflow.current_draft() {
            DraftView::Empty => {
                output.push_str(&Self::section_header("Draft"));
                output.push_str(&Self::no_drafts());
                output.push('\n');
            }
            DraftView::Candidate { index, total, answer } => {
                let (title, shown) = match workflow.session().working_copy() {
                    Some(working) => (format!("Draft {}/{} (editing)", index + 1, total), working),
                    None => (format!("Draft {}/{}", index + 1, total), answer),
                };
                output.push_str(&Self::section_header(&title));
                output.push_str(&Self::format_answer(shown));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Colored rendering of one answer with numbered blocks
    pub fn format_answer(answer: &Answer) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Header:".bold(), answer.header));
        output.push_str(&format!("{} {}\n", "Summary:".bold(), answer.summary));
        for (i, block) in answer.body.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n",
                format!("[{}] {}", i + 1, block.title).yellow().bold()
            ));
            for section in &block.sections {
                output.push_str(&format!("  • {}\n", section.text));
            }
        }
        output.push_str(&format!("\n{} {}\n", "Footer:".bold(), answer.footer));
        output
    }

    /// Numbered plain text, ready to paste
    pub fn format_text(answer: &Answer) -> String {
        to_plain_text(answer)
    }

    /// Wire form of an answer as pretty JSON
    pub fn format_json(answer: &Answer) -> String {
        serde_json::to_string_pretty(&encode_value(answer)).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_view_json(complaint: &Complaint, workflow: &ReplyWorkflow) -> String {
        let draft = match workflow.current_draft() {
            DraftView::Empty => serde_json::Value::Null,
            DraftView::Candidate { index, total, .. } => json!({
                "index": index + 1,
                "total": total,
                "editing": workflow.session().is_active(),
                "reply": workflow.visible_answer().map(encode_value),
            }),
        };
        let value = json!({
            "complaint": complaint,
            "phase": workflow.phase().as_str(),
            "review_points": workflow.review_points().to_payload(),
            "draft": draft,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered review points with their bullets
    pub fn format_review_points(points: &ReviewPoints) -> String {
        let mut output = String::new();
        for (i, point) in points.points().iter().enumerate() {
            let topic = if point.index.trim().is_empty() {
                "(no topic)".dimmed().to_string()
            } else {
                point.index.bold().to_string()
            };
            output.push_str(&format!("{}. {}\n", i + 1, topic));
            for (j, bullet) in point.section.iter().enumerate() {
                output.push_str(&format!("   {}) {}\n", j + 1, bullet.text));
            }
        }
        output
    }

    /// Numbered similar-history suggestions
    pub fn format_seeds(seeds: &[HistorySeed]) -> String {
        if seeds.is_empty() {
            return format!("{}\n", "No similar replies found.".dimmed());
        }
        let mut output = String::new();
        for (i, seed) in seeds.iter().enumerate() {
            output.push_str(&format!(
                "{} {} {}\n",
                format!("[{}]", i + 1).green().bold(),
                seed.block_title.bold(),
                format!("from \"{}\"", seed.source_title).dimmed()
            ));
            for section in &seed.sections {
                output.push_str(&format!("    • {}\n", section));
            }
        }
        output
    }

    /// Seeds as a JSON array
    pub fn format_seeds_json(seeds: &[HistorySeed]) -> String {
        let value: Vec<_> = seeds
            .iter()
            .map(|s| {
                json!({
                    "source_title": s.source_title,
                    "block_title": s.block_title,
                    "sections": s.sections,
                })
            })
            .collect();
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "[]".to_string())
    }

    fn no_drafts() -> String {
        "No drafts yet. Run `generate` to create some.".dimmed().to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
