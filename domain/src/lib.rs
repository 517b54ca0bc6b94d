//! Domain layer for minwon-desk
//!
//! This crate contains the reply content model and the drafting workflow.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer and wire form
//!
//! - **Answer**: the editable reply (header, summary, body blocks, footer) with
//!   decode-local ids on every block and section
//! - **Wire reply**: the backend's id-free representation; decoding is total and
//!   encoding normalizes section markers
//!
//! ## Drafting
//!
//! - **Draft pool**: generated candidates and the displayed one
//! - **Edit session**: an isolated working copy, committed by hold or complete
//! - **Review points**: user steering for regeneration

pub mod answer;
pub mod complaint;
pub mod config;
pub mod core;
pub mod draft;
pub mod history;
pub mod review;
pub mod workflow;

// Re-export commonly used types
pub use answer::{
    entities::{Answer, ContentBlock, DEFAULT_BLOCK_TITLE, PARSE_ERROR_TITLE, Section},
    export::to_plain_text,
    transcoder::{BULLET_MARKER, decode, decode_reply, encode, encode_value},
    wire::{WireBlock, WireBody, WireReply, WireSection},
};
pub use complaint::{Complaint, ComplaintId};
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    id::{BlockId, SectionId},
};
pub use draft::{
    edit_session::{AnswerField, EditSession},
    pool::{DraftPool, DraftView},
};
pub use history::{HistorySeed, SimilarReply};
pub use review::{ReviewBullet, ReviewPoint, ReviewPoints};
pub use workflow::{
    aggregate::{CommitKind, ReplyWorkflow},
    state::WorkflowPhase,
    status::{QualityRating, ReplyStatus},
};
