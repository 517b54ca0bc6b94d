//! Applying command-line edits to a workflow.
//!
//! Positions on the command line are 1-based and refer to what `show` and
//! `similar` print. Unlike the edit session itself, an out-of-range position
//! here is an error: it comes from a typo, not from a stale UI id.

use super::commands::{EditArgs, SteerArgs};
use minwon_domain::{AnswerField, DomainError, HistorySeed, ReplyWorkflow, ReviewPoint, ReviewPoints};
use thiserror::Error;

/// Errors raised while applying command-line edits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Draft {draft} does not exist ({total} available)")]
    NoSuchDraft { draft: usize, total: usize },

    #[error("Block {0} does not exist in the draft")]
    NoSuchBlock(usize),

    #[error("Similar-history suggestion {0} does not exist")]
    NoSuchSeed(usize),

    #[error("Review point {0} does not exist")]
    NoSuchPoint(usize),

    #[error("Bullet {bullet} does not exist in review point {point}")]
    NoSuchBullet { point: usize, bullet: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Open the requested draft for editing and apply `edits` to the working copy.
///
/// Returns the number of changes made.
pub fn apply_edits(
    workflow: &mut ReplyWorkflow,
    edits: &EditArgs,
    seeds: &[HistorySeed],
) -> Result<usize, EditError> {
    let total = workflow.pool().len();
    if edits.draft == 0 || !workflow.select(edits.draft - 1) {
        return Err(EditError::NoSuchDraft {
            draft: edits.draft,
            total,
        });
    }
    workflow.begin_edit()?;

    let mut changes = 0;
    for (field, value) in [
        (AnswerField::Header, &edits.header),
        (AnswerField::Summary, &edits.summary),
        (AnswerField::Footer, &edits.footer),
    ] {
        if let Some(value) = value {
            workflow.set_field(field, value.as_str());
            changes += 1;
        }
    }

    // Resolve every position before removing anything so numbering matches `show`.
    let block_ids = workflow
        .visible_answer()
        .map(|a| a.block_ids())
        .unwrap_or_default();
    let mut doomed = Vec::with_capacity(edits.remove_blocks.len());
    for &n in &edits.remove_blocks {
        let id = n
            .checked_sub(1)
            .and_then(|i| block_ids.get(i))
            .ok_or(EditError::NoSuchBlock(n))?;
        doomed.push(id.clone());
    }
    for id in &doomed {
        workflow.remove_block(id);
        changes += 1;
    }

    for title in &edits.add_blocks {
        if let Some(id) = workflow.add_block() {
            workflow.set_block_title(&id, title.as_str());
            changes += 1;
        }
    }

    for &n in &edits.seeds {
        let seed = n
            .checked_sub(1)
            .and_then(|i| seeds.get(i))
            .ok_or(EditError::NoSuchSeed(n))?;
        if workflow.add_block_from_seed(seed).is_some() {
            changes += 1;
        }
    }

    Ok(changes)
}

/// Apply review point edits from `steer`.
///
/// Without `--point` a new point is appended, unless the only point is still
/// blank, in which case it is filled in.
pub fn apply_steer(points: &mut ReviewPoints, args: &SteerArgs) -> Result<(), EditError> {
    let index = match args.point {
        Some(p) => {
            if p == 0 || p > points.len() {
                return Err(EditError::NoSuchPoint(p));
            }
            p - 1
        }
        None if !args.has_edits() => return Ok(()),
        None if points.points() == [ReviewPoint::blank()] => 0,
        None => {
            points.add_point();
            points.len() - 1
        }
    };

    if let Some(bullet) = args.remove_bullet {
        let count = points.points()[index].section.len();
        if bullet == 0 || bullet > count {
            return Err(EditError::NoSuchBullet {
                point: index + 1,
                bullet,
            });
        }
        points.remove_bullet(index, bullet - 1);
    }

    if let Some(topic) = &args.topic {
        points.set_topic(index, topic.as_str());
    }

    for text in &args.bullets {
        let bullets = &points.points()[index].section;
        let blank_tail = bullets
            .last()
            .is_some_and(|b| b.text.trim().is_empty());
        let position = if blank_tail {
            bullets.len() - 1
        } else {
            let position = bullets.len();
            points.add_bullet(index);
            position
        };
        points.set_bullet_text(index, position, text.as_str());
    }

    Ok(())
}
