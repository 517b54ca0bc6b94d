//! Reply content model.
//!
//! - [`entities::Answer`]: canonical editable reply (header, summary, body blocks, footer)
//! - [`wire::WireReply`]: backend representation, without ids
//! - [`transcoder`]: total decode and id-stripping encode between the two
//! - [`export::to_plain_text`]: numbered plain-text rendering for copying

pub mod entities;
pub mod export;
pub mod transcoder;
pub mod wire;
