//! Persisted reply status and quality rating

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reply status stored on the complaint (Value Object)
///
/// The backend stores its own labels; see [`ReplyStatus::as_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReplyStatus {
    #[default]
    Unanswered,
    /// Held: a reply exists but is not finished
    Editing,
    Completed,
}

impl ReplyStatus {
    /// Label used by the backend
    pub fn as_label(&self) -> &'static str {
        match self {
            ReplyStatus::Unanswered => "답변전",
            ReplyStatus::Editing => "수정중",
            ReplyStatus::Completed => "답변완료",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyStatus::Unanswered => "unanswered",
            ReplyStatus::Editing => "editing",
            ReplyStatus::Completed => "completed",
        }
    }

    /// Parse a backend label or English name. Unknown labels are unanswered.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "수정중" | "editing" => ReplyStatus::Editing,
            "답변완료" | "completed" => ReplyStatus::Completed,
            _ => ReplyStatus::Unanswered,
        }
    }
}

impl std::fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ReplyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for ReplyStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(ReplyStatus::from_label).unwrap_or_default())
    }
}

/// Post-completion quality rating (Value Object), 1 to 3 stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct QualityRating(u8);

impl QualityRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for QualityRating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QualityRating> for u8 {
    fn from(rating: QualityRating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
