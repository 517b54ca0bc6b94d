//! Reply workflow use case.
//!
//! Drives every transition of a complaint's reply workflow against the
//! [`ComplaintBackend`] port. Local state lives in a [`ComplaintView`]; the
//! view's lock is never held across a remote call, and a remote result is
//! applied only if the view is still open when it arrives.
//!
//! # Ordering
//!
//! ```text
//! generate / regenerate:  save_review_points → (re)generate → fetch_candidates → load pool
//! hold:                   persist_reply → set_status(editing)              → end session
//! complete:               confirm → rating → persist_reply → set_status(completed, rating) → end session
//! ```
//!
//! Any failure leaves the view exactly as it was before the transition.

use crate::config::WorkflowParams;
use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::complaint_backend::{BackendError, ComplaintBackend};
use crate::ports::completion_prompt::{CompletionPrompt, PromptError};
use crate::ports::progress::{NoProgress, WorkflowProgressNotifier};
use minwon_domain::{
    Answer, CommitKind, Complaint, ComplaintId, DomainError, HistorySeed, QualityRating,
    ReplyWorkflow, ReviewPoints, WireReply,
};
use serde_json::Value;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while driving a workflow transition
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Completion declined")]
    Declined,

    #[error("Complaint view closed; result discarded")]
    Detached,
}

impl WorkflowError {
    /// A generation is already running for this complaint
    pub fn is_busy(&self) -> bool {
        matches!(self, WorkflowError::Domain(e) if e.is_busy())
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, WorkflowError::Detached)
    }
}

/// Result of a successful completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub answer: Answer,
    pub rating: Option<QualityRating>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Generation {
    Initial,
    Again,
}

impl Generation {
    fn as_str(&self) -> &'static str {
        match self {
            Generation::Initial => "generate",
            Generation::Again => "regenerate",
        }
    }
}

/// One open complaint: its record, local workflow state and lifetime.
///
/// Clones share state. Closing any clone detaches all of them; results of
/// calls still in flight are then dropped instead of applied.
#[derive(Debug, Clone)]
pub struct ComplaintView {
    complaint: Complaint,
    workflow: Arc<Mutex<ReplyWorkflow>>,
    token: CancellationToken,
}

impl ComplaintView {
    pub fn new(complaint: Complaint, workflow: ReplyWorkflow) -> Self {
        Self {
            complaint,
            workflow: Arc::new(Mutex::new(workflow)),
            token: CancellationToken::new(),
        }
    }

    pub fn complaint(&self) -> &Complaint {
        &self.complaint
    }

    pub fn id(&self) -> ComplaintId {
        self.complaint.id
    }

    /// Run `f` against the current workflow state
    pub fn read<R>(&self, f: impl FnOnce(&ReplyWorkflow) -> R) -> R {
        let guard = self.workflow.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with mutable access to the workflow state
    pub fn update<R>(&self, f: impl FnOnce(&mut ReplyWorkflow) -> R) -> R {
        let mut guard = self.workflow.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> ReplyWorkflow {
        self.read(ReplyWorkflow::clone)
    }

    /// Detach the view (navigating away)
    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

/// Use case for drafting, editing and finalizing complaint replies.
#[derive(Clone)]
pub struct ReplyWorkflowUseCase {
    backend: Arc<dyn ComplaintBackend>,
    prompt: Arc<dyn CompletionPrompt>,
    progress: Arc<dyn WorkflowProgressNotifier>,
    audit_logger: Arc<dyn AuditLogger>,
    params: WorkflowParams,
}

impl ReplyWorkflowUseCase {
    pub fn new(backend: Arc<dyn ComplaintBackend>, prompt: Arc<dyn CompletionPrompt>) -> Self {
        Self {
            backend,
            prompt,
            progress: Arc::new(NoProgress),
            audit_logger: Arc::new(NoAuditLogger),
            params: WorkflowParams::default(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn WorkflowProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_audit_logger(mut self, logger: Arc<dyn AuditLogger>) -> Self {
        self.audit_logger = logger;
        self
    }

    pub fn with_params(mut self, params: WorkflowParams) -> Self {
        self.params = params;
        self
    }

    /// Open a complaint, deriving the workflow phase from persisted state only.
    ///
    /// Review points that cannot be fetched fall back to the blank default.
    pub async fn open(&self, id: ComplaintId) -> Result<ComplaintView, WorkflowError> {
        info!("Opening complaint {}", id);

        let complaint = self
            .call("fetch_complaint", id, self.backend.fetch_complaint(id))
            .await?;
        let candidates = self
            .call("fetch_candidates", id, self.backend.fetch_candidates(id))
            .await?;
        let review_points = match self
            .call("fetch_review_points", id, self.backend.fetch_review_points(id))
            .await
        {
            Ok(summary) => ReviewPoints::parse(&summary),
            Err(_) => ReviewPoints::default(),
        };

        let workflow =
            ReplyWorkflow::restore(id, complaint.reply_status, &candidates, review_points);
        info!(
            "Complaint {} is {} with {} candidate(s)",
            id,
            workflow.phase(),
            workflow.pool().len()
        );
        Ok(ComplaintView::new(complaint, workflow))
    }

    /// Close `view` and open the complaint again from backend state
    pub async fn reload(&self, view: &ComplaintView) -> Result<ComplaintView, WorkflowError> {
        view.close();
        self.open(view.id()).await
    }

    /// First generation of candidates. Returns the number loaded.
    pub async fn generate(&self, view: &ComplaintView) -> Result<usize, WorkflowError> {
        self.run_generation(view, Generation::Initial).await
    }

    /// Regenerate candidates from the current review points. Returns the number loaded.
    pub async fn regenerate(&self, view: &ComplaintView) -> Result<usize, WorkflowError> {
        self.run_generation(view, Generation::Again).await
    }

    async fn run_generation(
        &self,
        view: &ComplaintView,
        generation: Generation,
    ) -> Result<usize, WorkflowError> {
        let id = view.id();
        let review_points = view.update(|w| {
            w.begin_generation()?;
            Ok::<_, DomainError>(w.review_points().clone())
        })?;
        info!("Starting {} for complaint {}", generation.as_str(), id);

        let result = self.generation_calls(view, generation, &review_points).await;
        view.update(ReplyWorkflow::end_generation);
        let candidates = result?;

        let count = view.update(|w| {
            w.load_candidates(&candidates);
            w.pool().len()
        });
        self.audit_logger.log(AuditEvent::drafts_loaded(
            id,
            count,
            generation == Generation::Again,
        ));
        info!("Loaded {} candidate(s) for complaint {}", count, id);
        Ok(count)
    }

    async fn generation_calls(
        &self,
        view: &ComplaintView,
        generation: Generation,
        review_points: &ReviewPoints,
    ) -> Result<Vec<Value>, WorkflowError> {
        let id = view.id();
        self.ensure_open(view, generation.as_str())?;

        // The backend reads back the saved points while generating.
        self.call(
            "save_review_points",
            id,
            self.backend.save_review_points(id, review_points),
        )
        .await?;
        self.audit_logger
            .log(AuditEvent::review_points_saved(id, review_points.len()));
        self.ensure_open(view, "save_review_points")?;

        match generation {
            Generation::Initial => self.call("generate", id, self.backend.generate(id)).await?,
            Generation::Again => {
                self.call("regenerate", id, self.backend.regenerate(id))
                    .await?
            }
        }
        self.ensure_open(view, generation.as_str())?;

        let candidates = self
            .call("fetch_candidates", id, self.backend.fetch_candidates(id))
            .await?;
        self.ensure_open(view, "fetch_candidates")?;
        Ok(candidates)
    }

    /// Persist the current review points without generating
    pub async fn save_review_points(&self, view: &ComplaintView) -> Result<(), WorkflowError> {
        let id = view.id();
        let points = view.read(|w| w.review_points().clone());
        self.ensure_open(view, "save_review_points")?;
        self.call(
            "save_review_points",
            id,
            self.backend.save_review_points(id, &points),
        )
        .await?;
        self.audit_logger
            .log(AuditEvent::review_points_saved(id, points.len()));
        Ok(())
    }

    /// Persist the working copy with status `editing`, then end the session.
    ///
    /// No rating is collected.
    pub async fn hold(&self, view: &ComplaintView) -> Result<Answer, WorkflowError> {
        let id = view.id();
        let reply = view.read(|w| w.encoded_working_copy(CommitKind::Hold))?;

        self.persist(view, &reply, CommitKind::Hold, None).await?;

        let answer = view.update(|w| w.finish_commit(CommitKind::Hold))?;
        self.audit_logger
            .log(AuditEvent::reply_held(id, answer.body.len()));
        info!("Complaint {} held", id);
        Ok(answer)
    }

    /// Confirm, collect an optional rating, persist with status `completed`,
    /// then end the session.
    pub async fn complete(&self, view: &ComplaintView) -> Result<CompletionOutcome, WorkflowError> {
        let id = view.id();
        let (reply, working) = view.read(|w| {
            let reply = w.encoded_working_copy(CommitKind::Complete)?;
            let working = w
                .session()
                .working_copy()
                .cloned()
                .ok_or(DomainError::NoActiveSession)?;
            Ok::<_, DomainError>((reply, working))
        })?;

        if self.params.confirm_completion && !self.prompt.confirm_completion(&working).await? {
            info!("Completion of complaint {} declined", id);
            return Err(WorkflowError::Declined);
        }

        let rating = if self.params.ask_rating {
            self.prompt.request_rating().await?
        } else {
            None
        };
        match rating {
            Some(r) => debug!("Complaint {} rated {}", id, r),
            None => debug!("Complaint {} completed without rating", id),
        }

        self.persist(view, &reply, CommitKind::Complete, rating)
            .await?;

        let answer = view.update(|w| w.finish_commit(CommitKind::Complete))?;
        self.audit_logger
            .log(AuditEvent::reply_completed(id, answer.body.len(), rating));
        info!("Complaint {} completed", id);
        Ok(CompletionOutcome { answer, rating })
    }

    async fn persist(
        &self,
        view: &ComplaintView,
        reply: &WireReply,
        kind: CommitKind,
        rating: Option<QualityRating>,
    ) -> Result<(), WorkflowError> {
        let id = view.id();
        // A closed view never starts a write, even after the prompts returned.
        self.ensure_open(view, kind.as_str())?;
        self.call("persist_reply", id, self.backend.persist_reply(id, reply))
            .await?;
        self.call(
            "set_status",
            id,
            self.backend.set_status(id, kind.status(), rating),
        )
        .await?;
        self.ensure_open(view, kind.as_str())
    }

    /// Suggestions from similar past replies, ready to append as blocks
    pub async fn similar_seeds(
        &self,
        view: &ComplaintView,
    ) -> Result<Vec<HistorySeed>, WorkflowError> {
        let id = view.id();
        let history = self
            .call(
                "fetch_similar_history",
                id,
                self.backend.fetch_similar_history(id),
            )
            .await?;
        self.ensure_open(view, "fetch_similar_history")?;

        let seeds: Vec<_> = history.iter().map(HistorySeed::from_similar).collect();
        debug!("{} similar-history seed(s) for complaint {}", seeds.len(), id);
        Ok(seeds)
    }

    async fn call<T>(
        &self,
        operation: &'static str,
        id: ComplaintId,
        call: impl Future<Output = Result<T, BackendError>>,
    ) -> Result<T, BackendError> {
        debug!("{} for complaint {}", operation, id);
        self.progress.on_call_start(operation);
        let result = call.await;
        self.progress.on_call_complete(operation, result.is_ok());
        if let Err(e) = &result {
            warn!("{} failed for complaint {}: {}", operation, id, e);
        }
        result
    }

    fn ensure_open(&self, view: &ComplaintView, operation: &str) -> Result<(), WorkflowError> {
        if view.is_closed() {
            debug!(
                "Complaint {} view closed, dropping {} result",
                view.id(),
                operation
            );
            self.progress.on_result_discarded(operation);
            return Err(WorkflowError::Detached);
        }
        Ok(())
    }
}
