//! Isolated working copy of one answer
//!
//! Every mutator follows "mutate if present, else ignore": an unknown block or
//! section id, or a call while no session is active, leaves state untouched.
//! Ids can go stale between rapid UI events, so a missing id is not an error.

use crate::answer::entities::{Answer, ContentBlock, DEFAULT_BLOCK_TITLE, Section};
use crate::core::id::{BlockId, SectionId};
use crate::history::HistorySeed;

/// Top-level text fields of an [`Answer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    Header,
    Summary,
    Footer,
}

impl AnswerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerField::Header => "header",
            AnswerField::Summary => "summary",
            AnswerField::Footer => "footer",
        }
    }
}

impl std::str::FromStr for AnswerField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(AnswerField::Header),
            "summary" => Ok(AnswerField::Summary),
            "footer" => Ok(AnswerField::Footer),
            other => Err(format!("unknown answer field: {}", other)),
        }
    }
}

/// Edit session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// Not editing
    #[default]
    Idle,
    /// Editing a private copy of a candidate
    Active(Answer),
}

impl EditSession {
    /// Start editing a deep copy of `source`.
    ///
    /// Blocks without sections get one blank section so every block shown
    /// for editing has an input. `source` itself is never modified.
    pub fn begin(&mut self, source: &Answer) {
        let mut working = source.clone();
        for block in &mut working.body {
            block.ensure_section();
        }
        *self = EditSession::Active(working);
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Active(_))
    }

    pub fn working_copy(&self) -> Option<&Answer> {
        match self {
            EditSession::Active(answer) => Some(answer),
            EditSession::Idle => None,
        }
    }

    fn working_mut(&mut self) -> Option<&mut Answer> {
        match self {
            EditSession::Active(answer) => Some(answer),
            EditSession::Idle => None,
        }
    }

    pub fn set_field(&mut self, field: AnswerField, value: impl Into<String>) {
        if let Some(answer) = self.working_mut() {
            let target = match field {
                AnswerField::Header => &mut answer.header,
                AnswerField::Summary => &mut answer.summary,
                AnswerField::Footer => &mut answer.footer,
            };
            *target = value.into();
        }
    }

    /// Append a block with the default title and one blank section
    pub fn add_block(&mut self) -> Option<BlockId> {
        self.push_block(ContentBlock::seeded(""))
    }

    /// Append a block built from a similar-history suggestion
    pub fn add_block_from_seed(&mut self, seed: &HistorySeed) -> Option<BlockId> {
        let mut block = ContentBlock::new(
            seed.block_title.clone(),
            seed.sections.iter().map(Section::new).collect(),
        );
        block.ensure_section();
        if block.title.is_empty() {
            block.title = DEFAULT_BLOCK_TITLE.to_string();
        }
        self.push_block(block)
    }

    fn push_block(&mut self, block: ContentBlock) -> Option<BlockId> {
        let answer = self.working_mut()?;
        let id = block.id.clone();
        answer.body.push(block);
        Some(id)
    }

    pub fn remove_block(&mut self, block_id: &BlockId) {
        if let Some(answer) = self.working_mut() {
            answer.body.retain(|b| &b.id != block_id);
        }
    }

    pub fn add_section(&mut self, block_id: &BlockId) -> Option<SectionId> {
        let block = self.working_mut()?.block_mut(block_id)?;
        let section = Section::blank();
        let id = section.id.clone();
        block.sections.push(section);
        Some(id)
    }

    /// Remove a section. A block left with zero sections is kept.
    pub fn remove_section(&mut self, block_id: &BlockId, section_id: &SectionId) {
        if let Some(block) = self.working_mut().and_then(|a| a.block_mut(block_id)) {
            block.sections.retain(|s| &s.id != section_id);
        }
    }

    pub fn set_block_title(&mut self, block_id: &BlockId, value: impl Into<String>) {
        if let Some(block) = self.working_mut().and_then(|a| a.block_mut(block_id)) {
            block.title = value.into();
        }
    }

    pub fn set_section_text(
        &mut self,
        block_id: &BlockId,
        section_id: &SectionId,
        value: impl Into<String>,
    ) {
        if let Some(section) = self
            .working_mut()
            .and_then(|a| a.block_mut(block_id))
            .and_then(|b| b.section_mut(section_id))
        {
            section.text = value.into();
        }
    }

    /// Drop the working copy
    pub fn discard(&mut self) {
        *self = EditSession::Idle;
    }

    /// Hand the working copy to the caller and stop editing.
    ///
    /// Returns `None` when no session was active.
    pub fn commit(&mut self) -> Option<Answer> {
        match std::mem::take(self) {
            EditSession::Active(answer) => Some(answer),
            EditSession::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_block_answer() -> Answer {
        Answer::new(
            "Dear resident,",
            "Gist",
            vec![
                ContentBlock::new("B1", vec![Section::new("b1-a"), Section::new("b1-b")]),
                ContentBlock::new("B2", vec![Section::new("b2-a")]),
                ContentBlock::new("B3", vec![Section::new("b3-a")]),
            ],
            "Regards",
        )
    }

    fn active(source: &Answer) -> EditSession {
        let mut session = EditSession::default();
        session.begin(source);
        session
    }

    #[test]
    fn test_begin_activates_with_copy() {
        let source = three_block_answer();
        let session = active(&source);
        assert!(session.is_active());
        assert_eq!(session.working_copy(), Some(&source));
    }

    #[test]
    fn test_mutations_never_reach_source() {
        let source = three_block_answer();
        let snapshot = source.clone();
        let mut session = active(&source);

        let b1 = source.body[0].id.clone();
        let b2 = source.body[1].id.clone();
        let s1 = source.body[0].sections[0].id.clone();

        session.set_field(AnswerField::Header, "changed");
        session.set_field(AnswerField::Summary, "changed");
        session.set_field(AnswerField::Footer, "changed");
        session.set_block_title(&b1, "changed");
        session.set_section_text(&b1, &s1, "changed");
        session.add_section(&b1);
        session.remove_section(&b1, &s1);
        session.remove_block(&b2);
        session.add_block();

        assert_eq!(source, snapshot);
        assert_ne!(session.working_copy(), Some(&source));
    }

    #[test]
    fn test_add_and_remove_block_preserve_order_and_ids() {
        let source = three_block_answer();
        let mut session = active(&source);

        let b4 = session.add_block().unwrap();
        let ids: Vec<_> = session.working_copy().unwrap().block_ids();
        assert_eq!(
            ids,
            vec![
                source.body[0].id.clone(),
                source.body[1].id.clone(),
                source.body[2].id.clone(),
                b4.clone(),
            ]
        );

        session.remove_block(&source.body[1].id);
        let working = session.working_copy().unwrap();
        assert_eq!(
            working.block_ids(),
            vec![source.body[0].id.clone(), source.body[2].id.clone(), b4]
        );
        assert_eq!(working.body[0], source.body[0]);
        assert_eq!(working.body[1], source.body[2]);
        assert_eq!(working.body[2].title, DEFAULT_BLOCK_TITLE);
        assert_eq!(working.body[2].sections.len(), 1);
    }

    #[test]
    fn test_removing_last_section_keeps_block() {
        let source = three_block_answer();
        let mut session = active(&source);
        let b2 = &source.body[1];

        session.remove_section(&b2.id, &b2.sections[0].id);

        let block = session.working_copy().unwrap().block(&b2.id).unwrap();
        assert!(block.sections.is_empty());
    }

    #[test]
    fn test_add_section_appends_blank() {
        let source = three_block_answer();
        let mut session = active(&source);
        let b1 = source.body[0].id.clone();

        let new_id = session.add_section(&b1).unwrap();
        let block = session.working_copy().unwrap().block(&b1).unwrap();
        assert_eq!(block.sections.len(), 3);
        assert_eq!(block.sections[2].id, new_id);
        assert!(block.sections[2].text.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let source = three_block_answer();
        let mut session = active(&source);

        let stale_block = BlockId::new();
        let stale_section = SectionId::new();
        session.remove_block(&stale_block);
        session.set_block_title(&stale_block, "x");
        session.set_section_text(&source.body[0].id, &stale_section, "x");
        session.remove_section(&source.body[0].id, &stale_section);
        assert!(session.add_section(&stale_block).is_none());

        assert_eq!(session.working_copy(), Some(&source));
    }

    #[test]
    fn test_mutators_ignored_when_idle() {
        let mut session = EditSession::Idle;
        session.set_field(AnswerField::Header, "x");
        assert!(session.add_block().is_none());
        assert_eq!(session, EditSession::Idle);
        assert!(session.commit().is_none());
    }

    #[test]
    fn test_begin_seeds_empty_blocks() {
        let source = Answer::new("h", "s", vec![ContentBlock::new("empty", vec![])], "f");
        let session = active(&source);
        assert_eq!(session.working_copy().unwrap().body[0].sections.len(), 1);
        assert!(source.body[0].sections.is_empty());
    }

    #[test]
    fn test_commit_returns_copy_and_goes_idle() {
        let source = three_block_answer();
        let mut session = active(&source);
        session.set_field(AnswerField::Footer, "Thanks");

        let committed = session.commit().unwrap();
        assert_eq!(committed.footer, "Thanks");
        assert!(!session.is_active());
    }

    #[test]
    fn test_discard_goes_idle() {
        let mut session = active(&three_block_answer());
        session.discard();
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_add_block_from_seed() {
        let mut session = active(&three_block_answer());
        let seed = HistorySeed {
            source_title: "past".into(),
            block_title: "Parking".into(),
            sections: vec!["Enforcement increased".into(), "Signs added".into()],
        };
        let id = session.add_block_from_seed(&seed).unwrap();
        let block = session.working_copy().unwrap().block(&id).unwrap();
        assert_eq!(block.title, "Parking");
        assert_eq!(block.sections.len(), 2);

        let empty = HistorySeed {
            source_title: "past".into(),
            block_title: String::new(),
            sections: vec![],
        };
        let id = session.add_block_from_seed(&empty).unwrap();
        let block = session.working_copy().unwrap().block(&id).unwrap();
        assert_eq!(block.title, DEFAULT_BLOCK_TITLE);
        assert_eq!(block.sections.len(), 1);
    }

    #[test]
    fn test_answer_field_parse() {
        assert_eq!("footer".parse::<AnswerField>(), Ok(AnswerField::Footer));
        assert!("body".parse::<AnswerField>().is_err());
        assert_eq!(AnswerField::Summary.as_str(), "summary");
    }
}
