//! Identifiers for editable reply structure.
//!
//! Ids only exist in the in-memory [`Answer`](crate::answer::entities::Answer).
//! They are minted on decode or on structural edits, never serialized into the
//! wire form, and never reused once the owning block or section is deleted.

use std::fmt;

/// Identifier of a [`ContentBlock`](crate::answer::entities::ContentBlock)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    pub fn new() -> Self {
        Self(format!("block-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a [`Section`](crate::answer::entities::Section), unique within its block
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new() -> Self {
        Self(format!("section-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<BlockId> = (0..100).map(|_| BlockId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_id_prefixes() {
        assert!(BlockId::new().as_str().starts_with("block-"));
        assert!(SectionId::new().to_string().starts_with("section-"));
    }
}
