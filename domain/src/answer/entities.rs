//! Canonical editable reply structure

use crate::core::id::{BlockId, SectionId};

/// Title given to blocks created by the user through "add block"
pub const DEFAULT_BLOCK_TITLE: &str = "Enter a block title.";

/// Title of the placeholder block substituted for an unreadable reply body
pub const PARSE_ERROR_TITLE: &str = "Reply could not be parsed - please regenerate.";

/// One bullet-level statement within a [`ContentBlock`] (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub text: String,
}

impl Section {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new("")
    }
}

/// One topical unit of the reply body (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub id: BlockId,
    pub title: String,
    pub sections: Vec<Section>,
}

impl ContentBlock {
    /// Create a block with the given sections and a fresh id
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: BlockId::new(),
            title: title.into(),
            sections,
        }
    }

    /// Create a block seeded with one blank section.
    ///
    /// An empty title falls back to [`DEFAULT_BLOCK_TITLE`].
    pub fn seeded(title: impl Into<String>) -> Self {
        let title = title.into();
        let title = if title.is_empty() {
            DEFAULT_BLOCK_TITLE.to_string()
        } else {
            title
        };
        Self::new(title, vec![Section::blank()])
    }

    /// The block substituted when a wire body cannot be understood
    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR_TITLE, vec![Section::blank()])
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn section_mut(&mut self, id: &SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| &s.id == id)
    }

    /// Ensure the block is editable by seeding a blank section when it has none
    pub fn ensure_section(&mut self) {
        if self.sections.is_empty() {
            self.sections.push(Section::blank());
        }
    }
}

/// The reply being drafted (Aggregate root of the content model)
///
/// `body` order is significant: it determines the numbering of blocks in
/// every rendering and in the plain-text export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    pub header: String,
    pub summary: String,
    pub body: Vec<ContentBlock>,
    pub footer: String,
}

impl Answer {
    pub fn new(
        header: impl Into<String>,
        summary: impl Into<String>,
        body: Vec<ContentBlock>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            summary: summary.into(),
            body,
            footer: footer.into(),
        }
    }

    /// An answer with empty text fields and a single parse-error block
    pub fn placeholder() -> Self {
        Self {
            body: vec![ContentBlock::parse_error()],
            ..Self::default()
        }
    }

    pub fn block(&self, id: &BlockId) -> Option<&ContentBlock> {
        self.body.iter().find(|b| &b.id == id)
    }

    pub fn block_mut(&mut self, id: &BlockId) -> Option<&mut ContentBlock> {
        self.body.iter_mut().find(|b| &b.id == id)
    }

    pub fn block_ids(&self) -> Vec<BlockId> {
        self.body.iter().map(|b| b.id.clone()).collect()
    }

    /// Total number of sections across all blocks
    pub fn section_count(&self) -> usize {
        self.body.iter().map(|b| b.sections.len()).sum()
    }
}
