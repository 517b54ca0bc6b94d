//! Reply drafting workflow.
//!
//! - [`status::ReplyStatus`] / [`status::QualityRating`]: persisted status and rating
//! - [`state::WorkflowPhase`]: local lifecycle position
//! - [`aggregate::ReplyWorkflow`]: pool, edit session, review points and busy flag for one complaint

pub mod aggregate;
pub mod state;
pub mod status;
