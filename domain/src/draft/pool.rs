//! Candidate drafts for one complaint

use crate::answer::entities::Answer;
use crate::answer::transcoder;
use serde_json::Value;

/// What the pool currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftView<'a> {
    /// No candidates were generated; callers render a "no drafts" state
    Empty,
    Candidate {
        index: usize,
        total: usize,
        answer: &'a Answer,
    },
}

impl<'a> DraftView<'a> {
    pub fn answer(&self) -> Option<&'a Answer> {
        match self {
            DraftView::Empty => None,
            DraftView::Candidate { answer, .. } => Some(answer),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DraftView::Empty)
    }
}

/// Ordered candidate answers plus the displayed index (Entity)
///
/// The pool never touches the edit session. Discarding an in-progress edit
/// on reload is the caller's job, see
/// [`ReplyWorkflow::load_candidates`](crate::workflow::aggregate::ReplyWorkflow::load_candidates).
#[derive(Debug, Clone, Default)]
pub struct DraftPool {
    candidates: Vec<Answer>,
    displayed: usize,
}

impl DraftPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw candidates and replace the pool, showing the first one
    pub fn load(&mut self, candidates: &[Value]) {
        self.load_answers(candidates.iter().map(transcoder::decode).collect());
    }

    /// Replace the pool with already-decoded answers
    pub fn load_answers(&mut self, answers: Vec<Answer>) {
        self.candidates = answers;
        self.displayed = 0;
    }

    /// Show the candidate at `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether `index` was in range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.candidates.len() {
            self.displayed = index;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> DraftView<'_> {
        match self.candidates.get(self.displayed) {
            Some(answer) => DraftView::Candidate {
                index: self.displayed,
                total: self.candidates.len(),
                answer,
            },
            None => DraftView::Empty,
        }
    }

    pub fn displayed_index(&self) -> usize {
        self.displayed
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Answer] {
        &self.candidates
    }
}
