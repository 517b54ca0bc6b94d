//! Reply workflow phases

use super::status::ReplyStatus;

/// Position of a complaint in the reply lifecycle
///
/// ```text
/// Unanswered ─generate─▶ Drafted ─begin_edit─▶ Editing ─hold─────▶ Held
///                         ▲   ▲                  │  │                │
///                         │   └────reselect──────┘  └─complete─▶ Completed
///                         └──────────regenerate / begin_edit─────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkflowPhase {
    #[default]
    Unanswered,
    Drafted,
    Editing,
    Held,
    Completed,
}

impl WorkflowPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowPhase::Unanswered => "unanswered",
            WorkflowPhase::Drafted => "drafted",
            WorkflowPhase::Editing => "editing",
            WorkflowPhase::Held => "held",
            WorkflowPhase::Completed => "completed",
        }
    }

    /// Derive the phase from persisted state when a complaint is reopened.
    ///
    /// Cached client state is never consulted.
    pub fn from_persisted(status: ReplyStatus, has_candidates: bool) -> Self {
        match status {
            ReplyStatus::Completed => WorkflowPhase::Completed,
            ReplyStatus::Editing => WorkflowPhase::Held,
            ReplyStatus::Unanswered if has_candidates => WorkflowPhase::Drafted,
            ReplyStatus::Unanswered => WorkflowPhase::Unanswered,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowPhase::Completed)
    }

    /// Whether candidates may be (re)generated from this phase
    pub fn can_generate(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether a candidate may be opened for editing from this phase
    pub fn can_begin_edit(&self) -> bool {
        matches!(self, WorkflowPhase::Drafted | WorkflowPhase::Held)
    }

    /// Whether the edit session may be committed (hold, complete) or dropped
    pub fn is_editing(&self) -> bool {
        matches!(self, WorkflowPhase::Editing)
    }
}

impl std::fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_persisted() {
        assert_eq!(
            WorkflowPhase::from_persisted(ReplyStatus::Unanswered, false),
            WorkflowPhase::Unanswered
        );
        assert_eq!(
            WorkflowPhase::from_persisted(ReplyStatus::Unanswered, true),
            WorkflowPhase::Drafted
        );
        assert_eq!(
            WorkflowPhase::from_persisted(ReplyStatus::Editing, true),
            WorkflowPhase::Held
        );
        assert_eq!(
            WorkflowPhase::from_persisted(ReplyStatus::Completed, true),
            WorkflowPhase::Completed
        );
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(WorkflowPhase::Completed.is_terminal());
        assert!(!WorkflowPhase::Completed.can_generate());
        assert!(!WorkflowPhase::Completed.can_begin_edit());
        assert!(WorkflowPhase::Held.can_generate());
    }

    #[test]
    fn test_begin_edit_phases() {
        assert!(WorkflowPhase::Drafted.can_begin_edit());
        assert!(WorkflowPhase::Held.can_begin_edit());
        assert!(!WorkflowPhase::Unanswered.can_begin_edit());
        assert!(!WorkflowPhase::Editing.can_begin_edit());
    }
}
