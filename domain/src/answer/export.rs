//! Plain-text export of an answer (the "copy reply" output)

use super::entities::Answer;
use super::transcoder::BULLET_MARKER;

/// Render an answer as numbered plain text.
///
/// Header and summary are items 1 and 2, body blocks follow from 3, and the
/// footer takes the last number. Each block lists its sections as bullets.
/// Items are separated by a blank line.
pub fn to_plain_text(answer: &Answer) -> String {
    let mut items = Vec::with_capacity(answer.body.len() + 3);
    items.push(format!("1. {}", answer.header));
    items.push(format!("2. {}", answer.summary));

    for (i, block) in answer.body.iter().enumerate() {
        let mut item = format!("{}. {}", i + 3, block.title);
        for section in &block.sections {
            item.push('\n');
            item.push_str(BULLET_MARKER);
            item.push(' ');
            item.push_str(&section.text);
        }
        items.push(item);
    }

    items.push(format!("{}. {}", answer.body.len() + 3, answer.footer));
    items.join("\n\n")
}
