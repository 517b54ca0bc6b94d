//! Reply workflow aggregate
//!
//! Owns everything one complaint view needs locally: the phase, the draft
//! pool, the edit session, the review points and the busy flag. Remote calls
//! live in the application layer; this type only applies their results, so
//! a failed call leaves it untouched.

use super::state::WorkflowPhase;
use super::status::ReplyStatus;
use crate::answer::entities::Answer;
use crate::answer::transcoder;
use crate::answer::wire::WireReply;
use crate::complaint::ComplaintId;
use crate::core::error::DomainError;
use crate::core::id::{BlockId, SectionId};
use crate::draft::edit_session::{AnswerField, EditSession};
use crate::draft::pool::{DraftPool, DraftView};
use crate::history::HistorySeed;
use crate::review::ReviewPoints;
use serde_json::Value;

/// How a committed reply leaves the edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    Hold,
    Complete,
}

impl CommitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitKind::Hold => "hold",
            CommitKind::Complete => "complete",
        }
    }

    /// Status sent to the backend with the committed reply
    pub fn status(&self) -> ReplyStatus {
        match self {
            CommitKind::Hold => ReplyStatus::Editing,
            CommitKind::Complete => ReplyStatus::Completed,
        }
    }

    fn target_phase(&self) -> WorkflowPhase {
        match self {
            CommitKind::Hold => WorkflowPhase::Held,
            CommitKind::Complete => WorkflowPhase::Completed,
        }
    }
}

/// Local reply state of one complaint (Aggregate root)
#[derive(Debug, Clone)]
pub struct ReplyWorkflow {
    complaint_id: ComplaintId,
    phase: WorkflowPhase,
    pool: DraftPool,
    session: EditSession,
    review_points: ReviewPoints,
    generating: bool,
}

impl ReplyWorkflow {
    /// Fresh workflow for a complaint without replies
    pub fn new(complaint_id: ComplaintId) -> Self {
        Self {
            complaint_id,
            phase: WorkflowPhase::Unanswered,
            pool: DraftPool::new(),
            session: EditSession::Idle,
            review_points: ReviewPoints::default(),
            generating: false,
        }
    }

    /// Rebuild local state from what the backend has persisted
    pub fn restore(
        complaint_id: ComplaintId,
        status: ReplyStatus,
        candidates: &[Value],
        review_points: ReviewPoints,
    ) -> Self {
        let mut pool = DraftPool::new();
        pool.load(candidates);
        Self {
            complaint_id,
            phase: WorkflowPhase::from_persisted(status, !pool.is_empty()),
            pool,
            session: EditSession::Idle,
            review_points,
            generating: false,
        }
    }

    pub fn complaint_id(&self) -> ComplaintId {
        self.complaint_id
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn pool(&self) -> &DraftPool {
        &self.pool
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn review_points(&self) -> &ReviewPoints {
        &self.review_points
    }

    pub fn review_points_mut(&mut self) -> &mut ReviewPoints {
        &mut self.review_points
    }

    /// True while a (re)generation round trip is in flight
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// The draft currently shown
    pub fn current_draft(&self) -> DraftView<'_> {
        self.pool.current()
    }

    /// The working copy when editing, otherwise the displayed candidate
    pub fn visible_answer(&self) -> Option<&Answer> {
        self.session
            .working_copy()
            .or_else(|| self.pool.current().answer())
    }

    // ==================== Generation ====================

    /// Claim the busy flag before (re)generating.
    pub fn begin_generation(&mut self) -> Result<(), DomainError> {
        if !self.phase.can_generate() {
            return Err(DomainError::invalid_transition("generate", self.phase.as_str()));
        }
        if self.generating {
            return Err(DomainError::GenerationInProgress);
        }
        self.generating = true;
        Ok(())
    }

    /// Release the busy flag, whatever the outcome
    pub fn end_generation(&mut self) {
        self.generating = false;
    }

    /// Replace the pool with freshly generated candidates.
    ///
    /// Any active edit session is discarded. With no candidates an
    /// unanswered complaint stays unanswered; otherwise the workflow is
    /// drafted and shows the first candidate.
    pub fn load_candidates(&mut self, candidates: &[Value]) {
        self.pool.load(candidates);
        self.session.discard();
        if !(self.phase == WorkflowPhase::Unanswered && self.pool.is_empty()) {
            self.phase = WorkflowPhase::Drafted;
        }
    }

    /// Page to another candidate. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        self.pool.select(index)
    }

    // ==================== Editing ====================

    /// Open the displayed candidate for editing
    pub fn begin_edit(&mut self) -> Result<(), DomainError> {
        if !self.phase.can_begin_edit() {
            return Err(DomainError::invalid_transition("edit", self.phase.as_str()));
        }
        let source = self.pool.current().answer().ok_or(DomainError::NoCandidates)?;
        self.session.begin(source);
        self.phase = WorkflowPhase::Editing;
        Ok(())
    }

    /// Drop the working copy and go back to choosing a candidate
    pub fn reselect(&mut self) -> Result<(), DomainError> {
        if !self.phase.is_editing() {
            return Err(DomainError::invalid_transition("reselect", self.phase.as_str()));
        }
        self.session.discard();
        self.phase = WorkflowPhase::Drafted;
        Ok(())
    }

    pub fn set_field(&mut self, field: AnswerField, value: impl Into<String>) {
        self.session.set_field(field, value);
    }

    pub fn add_block(&mut self) -> Option<BlockId> {
        self.session.add_block()
    }

    pub fn add_block_from_seed(&mut self, seed: &HistorySeed) -> Option<BlockId> {
        self.session.add_block_from_seed(seed)
    }

    pub fn remove_block(&mut self, block_id: &BlockId) {
        self.session.remove_block(block_id);
    }

    pub fn add_section(&mut self, block_id: &BlockId) -> Option<SectionId> {
        self.session.add_section(block_id)
    }

    pub fn remove_section(&mut self, block_id: &BlockId, section_id: &SectionId) {
        self.session.remove_section(block_id, section_id);
    }

    pub fn set_block_title(&mut self, block_id: &BlockId, value: impl Into<String>) {
        self.session.set_block_title(block_id, value);
    }

    pub fn set_section_text(
        &mut self,
        block_id: &BlockId,
        section_id: &SectionId,
        value: impl Into<String>,
    ) {
        self.session.set_section_text(block_id, section_id, value);
    }

    // ==================== Commit ====================

    /// Encode the working copy for persistence without ending the session.
    ///
    /// The session stays active until [`finish_commit`](Self::finish_commit)
    /// is called after the backend accepted the reply.
    pub fn encoded_working_copy(&self, kind: CommitKind) -> Result<WireReply, DomainError> {
        if !self.phase.is_editing() {
            return Err(DomainError::invalid_transition(kind.as_str(), self.phase.as_str()));
        }
        self.session
            .working_copy()
            .map(transcoder::encode)
            .ok_or(DomainError::NoActiveSession)
    }

    /// End the session after a successful persist and move to the target phase.
    ///
    /// Returns the committed answer.
    pub fn finish_commit(&mut self, kind: CommitKind) -> Result<Answer, DomainError> {
        if !self.phase.is_editing() {
            return Err(DomainError::invalid_transition(kind.as_str(), self.phase.as_str()));
        }
        let answer = self.session.commit().ok_or(DomainError::NoActiveSession)?;
        self.phase = kind.target_phase();
        Ok(answer)
    }
}
