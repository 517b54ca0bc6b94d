//! Review points: the user-edited steering input for regeneration.
//!
//! Review points have the same indexed-section shape as a wire reply body but
//! carry no ids; they are always transient and re-serialized in full. Editing
//! is therefore positional, and out-of-range positions are ignored.

use crate::answer::transcoder::BULLET_MARKER;
use crate::answer::wire::{WireBlock, WireSection, parse_blocks};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One bullet under a review point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewBullet {
    /// Bullet marker
    pub title: String,
    pub text: String,
}

impl ReviewBullet {
    pub fn blank() -> Self {
        Self {
            title: BULLET_MARKER.to_string(),
            text: String::new(),
        }
    }
}

/// A topic with its bullets (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPoint {
    /// Topic label
    pub index: String,
    pub section: Vec<ReviewBullet>,
}

impl ReviewPoint {
    /// A point with an empty topic and one blank bullet
    pub fn blank() -> Self {
        Self {
            index: String::new(),
            section: vec![ReviewBullet::blank()],
        }
    }
}

impl From<WireBlock> for ReviewPoint {
    fn from(block: WireBlock) -> Self {
        Self {
            index: block.index,
            section: block
                .section
                .into_iter()
                .map(|s| ReviewBullet {
                    title: s.title,
                    text: s.text,
                })
                .collect(),
        }
    }
}

impl From<&ReviewPoint> for WireBlock {
    fn from(point: &ReviewPoint) -> Self {
        Self {
            index: point.index.clone(),
            section: point
                .section
                .iter()
                .map(|b| WireSection {
                    title: b.title.clone(),
                    text: b.text.clone(),
                })
                .collect(),
        }
    }
}

/// Ordered list of review points for one complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewPoints(Vec<ReviewPoint>);

impl Default for ReviewPoints {
    fn default() -> Self {
        Self(vec![ReviewPoint::blank()])
    }
}

impl ReviewPoints {
    pub fn new(points: Vec<ReviewPoint>) -> Self {
        if points.is_empty() {
            Self::default()
        } else {
            Self(points)
        }
    }

    /// Parse the `summary` field returned by the backend.
    ///
    /// The field may hold a JSON-encoded string or the array itself. Empty,
    /// malformed, or mistyped input yields the default single blank point.
    pub fn parse(summary: &Value) -> Self {
        let parsed = match summary {
            Value::String(raw) if raw.trim().is_empty() => None,
            Value::String(raw) => serde_json::from_str::<Value>(raw)
                .ok()
                .and_then(|v| parse_blocks(&v)),
            other => parse_blocks(other),
        };
        match parsed {
            Some(blocks) => Self::new(blocks.into_iter().map(ReviewPoint::from).collect()),
            None => Self::default(),
        }
    }

    /// Request payload for saving: `{ "answer_summary": [...] }`
    pub fn to_payload(&self) -> Value {
        serde_json::json!({ "answer_summary": self.0 })
    }

    pub fn points(&self) -> &[ReviewPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn set_topic(&mut self, point: usize, value: impl Into<String>) {
        if let Some(p) = self.0.get_mut(point) {
            p.index = value.into();
        }
    }

    pub fn set_bullet_text(&mut self, point: usize, bullet: usize, value: impl Into<String>) {
        if let Some(b) = self.0.get_mut(point).and_then(|p| p.section.get_mut(bullet)) {
            b.text = value.into();
        }
    }

    pub fn add_bullet(&mut self, point: usize) {
        if let Some(p) = self.0.get_mut(point) {
            p.section.push(ReviewBullet::blank());
        }
    }

    pub fn remove_bullet(&mut self, point: usize, bullet: usize) {
        if let Some(p) = self.0.get_mut(point)
            && bullet < p.section.len()
        {
            p.section.remove(bullet);
        }
    }

    pub fn add_point(&mut self) {
        self.0.push(ReviewPoint::blank());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_string() {
        let summary = json!(r#"[{"index":"Road","section":[{"title":"•","text":"repair"}]}]"#);
        let points = ReviewPoints::parse(&summary);
        assert_eq!(points.len(), 1);
        assert_eq!(points.points()[0].index, "Road");
        assert_eq!(points.points()[0].section[0].text, "repair");
    }

    #[test]
    fn test_parse_array_value() {
        let summary = json!([
            { "index": "A", "section": [] },
            { "index": "B", "section": [{ "title": "•", "text": "b" }] }
        ]);
        let points = ReviewPoints::parse(&summary);
        assert_eq!(points.len(), 2);
        assert_eq!(points.points()[1].index, "B");
    }

    #[test]
    fn test_parse_defensive_defaults() {
        for summary in [json!(""), json!("{oops"), json!(null), json!([]), json!(42), json!("{}")] {
            let points = ReviewPoints::parse(&summary);
            assert_eq!(points, ReviewPoints::default(), "input {summary}");
            assert_eq!(points.points()[0].section.len(), 1);
        }
    }

    #[test]
    fn test_payload_shape() {
        let points = ReviewPoints::default();
        let payload = points.to_payload();
        assert_eq!(payload["answer_summary"][0]["index"], "");
        assert_eq!(payload["answer_summary"][0]["section"][0]["title"], BULLET_MARKER);
    }

    #[test]
    fn test_positional_edits() {
        let mut points = ReviewPoints::default();
        points.set_topic(0, "Noise");
        points.set_bullet_text(0, 0, "Night construction");
        points.add_bullet(0);
        points.add_point();

        assert_eq!(points.len(), 2);
        assert_eq!(points.points()[0].index, "Noise");
        assert_eq!(points.points()[0].section.len(), 2);

        points.remove_bullet(0, 0);
        assert_eq!(points.points()[0].section.len(), 1);
        assert!(points.points()[0].section[0].text.is_empty());
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut points = ReviewPoints::default();
        let before = points.clone();
        points.set_topic(3, "x");
        points.set_bullet_text(0, 9, "x");
        points.add_bullet(5);
        points.remove_bullet(0, 4);
        points.remove_bullet(2, 0);
        assert_eq!(points, before);
    }

    #[test]
    fn test_wire_block_conversion() {
        let point = ReviewPoint {
            index: "Topic".into(),
            section: vec![ReviewBullet {
                title: "가".into(),
                text: "t".into(),
            }],
        };
        let block = WireBlock::from(&point);
        assert_eq!(ReviewPoint::from(block), point);
    }
}
