//! Drafting state for one complaint.
//!
//! - [`pool::DraftPool`]: candidate answers and the displayed index
//! - [`edit_session::EditSession`]: isolated working copy of the answer being edited

pub mod edit_session;
pub mod pool;
