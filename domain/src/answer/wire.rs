//! Backend wire form of a reply
//!
//! ```json
//! { "header": "...", "summary": "...",
//!   "body": [ { "index": "...", "section": [ { "title": "•", "text": "..." } ] } ],
//!   "footer": "..." }
//! ```
//!
//! Backends have shipped several incompatible body conventions over time, so
//! raw payloads are classified once into a [`WireBody`] and never re-checked
//! downstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One bullet inside a wire block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSection {
    pub title: String,
    pub text: String,
}

/// One indexed block of a wire reply body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireBlock {
    pub index: String,
    pub section: Vec<WireSection>,
}

/// Canonical wire reply, as sent to and read from the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireReply {
    pub header: String,
    pub summary: String,
    pub body: Vec<WireBlock>,
    pub footer: String,
}

/// Classified body of a raw reply payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireBody {
    /// An array of indexed blocks (canonical or legacy field names)
    WellFormed(Vec<WireBlock>),
    /// A string that does not contain a block array
    StringBody(String),
    /// Absent, null, or any other JSON type
    MissingBody,
}

impl WireBody {
    /// Classify a raw `body` value.
    ///
    /// Strings are parsed once as JSON; a string holding a block array is
    /// well-formed, anything else stays a [`WireBody::StringBody`].
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => WireBody::MissingBody,
            Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(parsed) => match parse_blocks(&parsed) {
                    Some(blocks) => WireBody::WellFormed(blocks),
                    None => WireBody::StringBody(s.clone()),
                },
                Err(_) => WireBody::StringBody(s.clone()),
            },
            Some(other) => match parse_blocks(other) {
                Some(blocks) => WireBody::WellFormed(blocks),
                None => WireBody::MissingBody,
            },
        }
    }

    pub fn is_well_formed(&self) -> bool {
        matches!(self, WireBody::WellFormed(_))
    }
}

/// Parse an array of indexed blocks.
///
/// Accepts the canonical `{index, section}` naming and the older
/// `{review, sections}` / `{title, sections}` namings. Sections may be
/// `{title, text}` records or bare strings. Returns `None` when the value is
/// not an array or any entry is not a block record.
pub fn parse_blocks(value: &Value) -> Option<Vec<WireBlock>> {
    let entries = value.as_array()?;
    entries.iter().map(parse_block).collect()
}

fn parse_block(entry: &Value) -> Option<WireBlock> {
    let obj = entry.as_object()?;
    let index = first_string(obj, &["index", "review", "title"])?;
    let section = match first_present(obj, &["section", "sections"]) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(parse_section)
            .collect::<Option<Vec<_>>>()?,
        Some(_) => return None,
    };
    Some(WireBlock { index, section })
}

fn parse_section(item: &Value) -> Option<WireSection> {
    match item {
        Value::String(text) => Some(WireSection {
            title: String::new(),
            text: text.clone(),
        }),
        Value::Object(obj) => Some(WireSection {
            title: first_string(obj, &["title"]).unwrap_or_default(),
            text: first_string(obj, &["text"]).unwrap_or_default(),
        }),
        _ => None,
    }
}

/// First present key among `keys`
pub(crate) fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

/// First key among `keys` holding a string
pub(crate) fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_canonical_array() {
        let body = json!([{ "index": "A", "section": [{ "title": "•", "text": "x" }] }]);
        let classified = WireBody::classify(Some(&body));
        assert_eq!(
            classified,
            WireBody::WellFormed(vec![WireBlock {
                index: "A".into(),
                section: vec![WireSection {
                    title: "•".into(),
                    text: "x".into()
                }],
            }])
        );
    }

    #[test]
    fn test_classify_json_encoded_string() {
        let body = json!(r#"[{"index":"A","section":[{"title":"가","text":"x"}]}]"#);
        assert!(WireBody::classify(Some(&body)).is_well_formed());
    }

    #[test]
    fn test_classify_plain_string() {
        let body = json!("not json");
        assert_eq!(
            WireBody::classify(Some(&body)),
            WireBody::StringBody("not json".into())
        );
    }

    #[test]
    fn test_classify_missing_and_wrong_types() {
        assert_eq!(WireBody::classify(None), WireBody::MissingBody);
        assert_eq!(WireBody::classify(Some(&Value::Null)), WireBody::MissingBody);
        assert_eq!(WireBody::classify(Some(&json!(42))), WireBody::MissingBody);
        assert_eq!(
            WireBody::classify(Some(&json!({ "index": "A" }))),
            WireBody::MissingBody
        );
    }

    #[test]
    fn test_legacy_review_sections_naming() {
        let body = json!([{ "review": "Topic", "sections": ["one", { "text": "two" }] }]);
        let blocks = parse_blocks(&body).unwrap();
        assert_eq!(blocks[0].index, "Topic");
        assert_eq!(blocks[0].section.len(), 2);
        assert_eq!(blocks[0].section[0].text, "one");
        assert_eq!(blocks[0].section[1].text, "two");
    }

    #[test]
    fn test_array_with_non_record_entry_is_rejected() {
        assert!(parse_blocks(&json!([{ "index": "A", "section": [] }, 3])).is_none());
        assert!(parse_blocks(&json!([{ "index": "A", "section": "x" }])).is_none());
    }

    #[test]
    fn test_wire_reply_serializes_without_ids() {
        let reply = WireReply {
            header: "h".into(),
            summary: "s".into(),
            body: vec![WireBlock {
                index: "A".into(),
                section: vec![],
            }],
            footer: "f".into(),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert!(!value.to_string().contains("\"id\""));
        assert_eq!(value["body"][0]["index"], "A");
    }
}
