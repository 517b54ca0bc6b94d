//! Conversion between the wire form and the editable [`Answer`]
//!
//! Decoding is total: every input, including `null` and garbage, yields a
//! renderable answer. Encoding strips ids and normalizes every section title
//! to [`BULLET_MARKER`].

use super::entities::{Answer, ContentBlock, Section};
use super::wire::{WireBlock, WireBody, WireReply, WireSection, first_present, first_string};
use serde_json::{Map, Value};

/// Marker written as the title of every encoded section
pub const BULLET_MARKER: &str = "•";

/// Decode a raw backend payload into an editable answer.
///
/// Recognized shapes, detected by field presence:
/// - canonical `{header, summary, body, footer}` with `body` as an array or a
///   JSON-encoded array string;
/// - legacy `{greeting, contentBlocks, closing}`;
/// - either of the above wrapped in a JSON-encoded string.
///
/// Anything else decodes to [`Answer::placeholder`].
pub fn decode(value: &Value) -> Answer {
    match value {
        Value::Object(obj) => decode_object(obj),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(obj)) => decode_object(&obj),
            _ => Answer::placeholder(),
        },
        _ => Answer::placeholder(),
    }
}

/// Decode a typed wire reply.
pub fn decode_reply(reply: &WireReply) -> Answer {
    Answer::new(
        reply.header.clone(),
        reply.summary.clone(),
        decode_blocks(&reply.body),
        reply.footer.clone(),
    )
}

/// Encode an answer for persistence. Ids never appear in the output.
pub fn encode(answer: &Answer) -> WireReply {
    WireReply {
        header: answer.header.clone(),
        summary: answer.summary.clone(),
        body: answer.body.iter().map(encode_block).collect(),
        footer: answer.footer.clone(),
    }
}

/// Encode straight to JSON, ready for a request body
pub fn encode_value(answer: &Answer) -> Value {
    serde_json::json!({
        "header": answer.header,
        "summary": answer.summary,
        "body": answer.body.iter().map(encode_block).collect::<Vec<_>>(),
        "footer": answer.footer,
    })
}

fn encode_block(block: &ContentBlock) -> WireBlock {
    WireBlock {
        index: block.title.clone(),
        section: block
            .sections
            .iter()
            .map(|s| WireSection {
                title: BULLET_MARKER.to_string(),
                text: s.text.clone(),
            })
            .collect(),
    }
}

fn decode_object(obj: &Map<String, Value>) -> Answer {
    let legacy = !obj.contains_key("body") && obj.contains_key("contentBlocks");

    let (header, footer, body) = if legacy {
        (
            first_string(obj, &["greeting", "header"]),
            first_string(obj, &["closing", "footer"]),
            WireBody::classify(obj.get("contentBlocks")),
        )
    } else {
        (
            first_string(obj, &["header"]),
            first_string(obj, &["footer"]),
            WireBody::classify(first_present(obj, &["body"])),
        )
    };

    let body = match body {
        WireBody::WellFormed(blocks) => decode_blocks(&blocks),
        WireBody::StringBody(_) | WireBody::MissingBody => vec![ContentBlock::parse_error()],
    };

    Answer::new(
        header.unwrap_or_default(),
        first_string(obj, &["summary"]).unwrap_or_default(),
        body,
        footer.unwrap_or_default(),
    )
}

/// An empty block list decodes to one seeded block so there is always
/// something to edit.
fn decode_blocks(blocks: &[WireBlock]) -> Vec<ContentBlock> {
    if blocks.is_empty() {
        return vec![ContentBlock::seeded("")];
    }
    blocks
        .iter()
        .map(|b| {
            ContentBlock::new(
                b.index.clone(),
                b.section.iter().map(|s| Section::new(s.text.clone())).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::entities::PARSE_ERROR_TITLE;
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn sample_wire() -> Value {
        json!({
            "header": "Thank you for your inquiry.",
            "summary": "The road in front of the school is damaged.",
            "body": [
                { "index": "Road repair", "section": [
                    { "title": "가", "text": "Repairs are scheduled for next week." },
                    { "title": "나", "text": "Detours will be signposted." }
                ]},
                { "index": "Safety", "section": [
                    { "title": "•", "text": "A safety check was performed." }
                ]}
            ],
            "footer": "Please contact the road department for details."
        })
    }

    #[test]
    fn test_decode_maps_fields() {
        let answer = decode(&sample_wire());
        assert_eq!(answer.header, "Thank you for your inquiry.");
        assert_eq!(answer.summary, "The road in front of the school is damaged.");
        assert_eq!(answer.footer, "Please contact the road department for details.");
        assert_eq!(answer.body.len(), 2);
        assert_eq!(answer.body[0].title, "Road repair");
        assert_eq!(answer.body[0].sections[1].text, "Detours will be signposted.");
    }

    #[test]
    fn test_decode_assigns_unique_ids() {
        let answer = decode(&sample_wire());
        let block_ids: HashSet<_> = answer.body.iter().map(|b| b.id.clone()).collect();
        assert_eq!(block_ids.len(), 2);
        let section_ids: HashSet<_> = answer.body[0].sections.iter().map(|s| s.id.clone()).collect();
        assert_eq!(section_ids.len(), 2);
    }

    #[test]
    fn test_round_trip_normalizes_section_titles_only() {
        let wire = sample_wire();
        let encoded = serde_json::to_value(encode(&decode(&wire))).unwrap();

        let mut expected = wire.clone();
        for block in expected["body"].as_array_mut().unwrap() {
            for section in block["section"].as_array_mut().unwrap() {
                section["title"] = json!(BULLET_MARKER);
            }
        }
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_round_trip_typed_reply() {
        let reply: WireReply = serde_json::from_value(sample_wire()).unwrap();
        let encoded = encode(&decode_reply(&reply));
        assert_eq!(encoded.header, reply.header);
        assert_eq!(encoded.body.len(), reply.body.len());
        for (out, orig) in encoded.body.iter().zip(&reply.body) {
            assert_eq!(out.index, orig.index);
            let texts: Vec<_> = out.section.iter().map(|s| &s.text).collect();
            let orig_texts: Vec<_> = orig.section.iter().map(|s| &s.text).collect();
            assert_eq!(texts, orig_texts);
            assert!(out.section.iter().all(|s| s.title == BULLET_MARKER));
        }
    }

    #[test]
    fn test_encode_value_matches_encode() {
        let answer = decode(&sample_wire());
        assert_eq!(
            encode_value(&answer),
            serde_json::to_value(encode(&answer)).unwrap()
        );
        assert!(!encode_value(&answer).to_string().contains("\"id\""));
    }

    #[test]
    fn test_decode_malformed_body_string() {
        let answer = decode(&json!({
            "header": "h", "summary": "s", "body": "not json", "footer": "f"
        }));
        assert_eq!(answer.header, "h");
        assert_eq!(answer.body.len(), 1);
        assert_eq!(answer.body[0].title, PARSE_ERROR_TITLE);
        assert_eq!(answer.body[0].sections.len(), 1);
        assert!(answer.body[0].sections[0].text.is_empty());
    }

    #[test]
    fn test_decode_is_total() {
        let inputs = [
            Value::Null,
            json!({}),
            json!({ "body": 12 }),
            json!({ "body": { "index": "x" } }),
            json!({ "body": [1, 2, 3] }),
            json!({ "header": 5, "body": [{ "index": "A", "section": [null] }] }),
            json!("{ broken"),
            json!([]),
            json!(true),
        ];
        for input in inputs {
            let answer = decode(&input);
            assert!(!answer.body.is_empty(), "no block for {input}");
        }
    }

    fn arb_wire_reply() -> impl Strategy<Value = WireReply> {
        let section = (".*", ".*").prop_map(|(title, text)| WireSection { title, text });
        let block = (".*", prop::collection::vec(section, 0..4))
            .prop_map(|(index, section)| WireBlock { index, section });
        (".*", ".*", prop::collection::vec(block, 1..5), ".*").prop_map(
            |(header, summary, body, footer)| WireReply {
                header,
                summary,
                body,
                footer,
            },
        )
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            ".*".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 32, 4, |inner| {
            let key = prop_oneof![
                Just("header".to_string()),
                Just("body".to_string()),
                Just("contentBlocks".to_string()),
                Just("index".to_string()),
                Just("section".to_string()),
                "[a-z]{1,6}",
            ];
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map(key, inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip_normalizes_titles(wire in arb_wire_reply()) {
            let mut expected = wire.clone();
            for block in &mut expected.body {
                for section in &mut block.section {
                    section.title = BULLET_MARKER.to_string();
                }
            }

            let value = serde_json::to_value(&wire).unwrap();
            prop_assert_eq!(&encode(&decode(&value)), &expected);
            prop_assert_eq!(&encode(&decode_reply(&wire)), &expected);
        }

        #[test]
        fn prop_decode_always_yields_a_block(value in arb_json()) {
            prop_assert!(!decode(&value).body.is_empty());
        }
    }

    #[test]
    fn test_decode_json_encoded_body() {
        let answer = decode(&json!({
            "header": "h",
            "summary": "s",
            "body": r#"[{"index":"A","section":[{"title":"•","text":"x"}]}]"#,
            "footer": "f"
        }));
        assert_eq!(answer.body[0].title, "A");
        assert_eq!(answer.body[0].sections[0].text, "x");
    }

    #[test]
    fn test_decode_whole_reply_as_string() {
        let raw = serde_json::to_string(&sample_wire()).unwrap();
        let answer = decode(&Value::String(raw));
        assert_eq!(answer.body.len(), 2);
    }

    #[test]
    fn test_decode_legacy_content_blocks() {
        let answer = decode(&json!({
            "greeting": "Hello",
            "summary": "gist",
            "contentBlocks": [{ "title": "Topic", "sections": ["first", "second"] }],
            "closing": "Bye"
        }));
        assert_eq!(answer.header, "Hello");
        assert_eq!(answer.footer, "Bye");
        assert_eq!(answer.body[0].title, "Topic");
        assert_eq!(answer.body[0].sections.len(), 2);
    }

    #[test]
    fn test_decode_empty_body_seeds_one_block() {
        let answer = decode(&json!({ "header": "h", "summary": "s", "body": [], "footer": "f" }));
        assert_eq!(answer.body.len(), 1);
        assert_eq!(answer.body[0].sections.len(), 1);
    }

    #[test]
    fn test_block_without_sections_round_trips() {
        let wire = json!({
            "header": "h", "summary": "s",
            "body": [{ "index": "Empty", "section": [] }],
            "footer": "f"
        });
        let encoded = serde_json::to_value(encode(&decode(&wire))).unwrap();
        assert_eq!(encoded, wire);
    }
}
