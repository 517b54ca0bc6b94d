//! Similar-history suggestions.
//!
//! Past replies to similar complaints are offered as seeds for a new content
//! block. Their `content` arrives as an object, a JSON-encoded string, or
//! plain text, and is read with the same tolerance as a draft reply.

use crate::answer::wire::{WireBlock, WireBody, parse_blocks};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One suggestion as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarReply {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: Value,
    #[serde(default)]
    pub content: Value,
}

/// Block title and section texts extracted from a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySeed {
    /// Title of the past complaint, for display
    pub source_title: String,
    pub block_title: String,
    pub sections: Vec<String>,
}

impl HistorySeed {
    /// Extract a seed from a suggestion.
    ///
    /// The block title is the first body entry's trimmed index, falling back
    /// to the suggestion summary. Sections are that entry's non-empty trimmed
    /// texts, falling back to the raw content when it is plain text.
    pub fn from_similar(reply: &SimilarReply) -> Self {
        let first_block = first_body_block(&reply.content);

        let block_title = first_block
            .as_ref()
            .map(|b| b.index.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| summary_text(&reply.summary));

        let sections = match &first_block {
            Some(block) => block
                .section
                .iter()
                .map(|s| s.text.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            None => match &reply.content {
                Value::String(raw) if !raw.trim().is_empty() => vec![raw.trim().to_string()],
                _ => Vec::new(),
            },
        };

        Self {
            source_title: reply.title.clone(),
            block_title,
            sections,
        }
    }
}

fn first_body_block(content: &Value) -> Option<WireBlock> {
    let object = match content {
        Value::Object(_) => content.clone(),
        Value::String(raw) => serde_json::from_str::<Value>(raw).ok()?,
        _ => return None,
    };
    match WireBody::classify(object.get("body")) {
        WireBody::WellFormed(blocks) => blocks.into_iter().next(),
        _ => object
            .get("contentBlocks")
            .and_then(parse_blocks)
            .and_then(|b| b.into_iter().next()),
    }
}

fn summary_text(summary: &Value) -> String {
    match summary {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_from_object_content() {
        let reply = SimilarReply {
            title: "Pothole on Main St".into(),
            summary: json!("Road damage"),
            content: json!({
                "header": "h",
                "body": [
                    { "index": "  Road repair  ", "section": [
                        { "title": "•", "text": " Patched within a week " },
                        { "title": "•", "text": "   " }
                    ]},
                    { "index": "Ignored", "section": [] }
                ]
            }),
        };
        let seed = HistorySeed::from_similar(&reply);
        assert_eq!(seed.source_title, "Pothole on Main St");
        assert_eq!(seed.block_title, "Road repair");
        assert_eq!(seed.sections, vec!["Patched within a week".to_string()]);
    }

    #[test]
    fn test_seed_from_json_string_content() {
        let content = r#"{"body":[{"index":"Noise","section":[{"title":"•","text":"Inspected"}]}]}"#;
        let reply = SimilarReply {
            title: "t".into(),
            summary: json!("s"),
            content: json!(content),
        };
        let seed = HistorySeed::from_similar(&reply);
        assert_eq!(seed.block_title, "Noise");
        assert_eq!(seed.sections, vec!["Inspected".to_string()]);
    }

    #[test]
    fn test_seed_from_plain_text_content() {
        let reply = SimilarReply {
            title: "t".into(),
            summary: json!("Streetlight outage"),
            content: json!("  The light was replaced.  "),
        };
        let seed = HistorySeed::from_similar(&reply);
        assert_eq!(seed.block_title, "Streetlight outage");
        assert_eq!(seed.sections, vec!["The light was replaced.".to_string()]);
    }

    #[test]
    fn test_seed_with_object_summary_and_no_content() {
        let reply: SimilarReply = serde_json::from_value(json!({
            "title": "t",
            "summary": { "gist": "x" }
        }))
        .unwrap();
        let seed = HistorySeed::from_similar(&reply);
        assert_eq!(seed.block_title, r#"{"gist":"x"}"#);
        assert!(seed.sections.is_empty());
    }
}
