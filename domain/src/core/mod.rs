//! Core domain concepts shared across all subdomains.
//!
//! - [`id::BlockId`] / [`id::SectionId`]: decode-local identifiers for editable structure
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod id;
