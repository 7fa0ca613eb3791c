//! Enumerated task fields: status, priority, and difficulty level.
//!
//! Each field is optional on a task. The remote API encodes "unset" as an
//! empty string, which [`optional_label`] maps to `None`.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared behaviour of the fixed task enumerations.
pub trait TaskLabel: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;

    /// Every value in canonical display order.
    const ALL: &'static [Self];

    /// Returns the canonical wire label.
    fn as_str(self) -> &'static str;

    /// Parses a wire label, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownLabel`] when the value does not
    /// name a member of the enumeration.
    fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TaskDomainError::UnknownLabel {
                field: Self::FIELD,
                value: value.to_owned(),
            })
    }
}

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is awaiting review.
    #[serde(rename = "In Review")]
    InReview,
    /// Work is complete.
    #[serde(rename = "Done")]
    Done,
    /// Work was abandoned.
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl TaskStatus {
    /// Returns `true` for statuses that can no longer become overdue.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

impl TaskLabel for TaskStatus {
    const FIELD: &'static str = "status";
    const ALL: &'static [Self] = &[
        Self::ToDo,
        Self::InProgress,
        Self::InReview,
        Self::Done,
        Self::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Business priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Most urgent.
    #[serde(rename = "Very High")]
    VeryHigh,
    /// Urgent.
    #[serde(rename = "High")]
    High,
    /// Normal.
    #[serde(rename = "Medium")]
    Medium,
    /// Can wait.
    #[serde(rename = "Low")]
    Low,
    /// Least urgent.
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl TaskPriority {
    /// Returns the numeric rank used for sorting; higher is more urgent.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::VeryHigh => 5,
            Self::High => 4,
            Self::Medium => 3,
            Self::Low => 2,
            Self::VeryLow => 1,
        }
    }

    /// Returns `true` when the priority places a task in a high-impact
    /// quadrant.
    #[must_use]
    pub const fn is_high_impact(self) -> bool {
        matches!(self, Self::VeryHigh | Self::High | Self::Medium)
    }
}

impl TaskLabel for TaskPriority {
    const FIELD: &'static str = "priority";
    const ALL: &'static [Self] = &[
        Self::VeryHigh,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::VeryLow,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

/// Estimated effort of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Largest effort.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    /// Large effort.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Moderate effort.
    #[serde(rename = "Moderate")]
    Moderate,
    /// Small effort.
    #[serde(rename = "Easy")]
    Easy,
}

impl DifficultyLevel {
    /// Returns the numeric rank used for sorting; higher is harder.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::VeryDifficult => 4,
            Self::Difficult => 3,
            Self::Moderate => 2,
            Self::Easy => 1,
        }
    }

    /// Returns `true` when the difficulty places a task in a high-effort
    /// quadrant.
    #[must_use]
    pub const fn is_high_effort(self) -> bool {
        matches!(self, Self::VeryDifficult | Self::Difficult)
    }
}

impl TaskLabel for DifficultyLevel {
    const FIELD: &'static str = "difficulty level";
    const ALL: &'static [Self] = &[
        Self::VeryDifficult,
        Self::Difficult,
        Self::Moderate,
        Self::Easy,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::VeryDifficult => "Very Difficult",
            Self::Difficult => "Difficult",
            Self::Moderate => "Moderate",
            Self::Easy => "Easy",
        }
    }
}

macro_rules! label_conversions {
    ($($name:ident),+) => {
        $(
            impl TryFrom<&str> for $name {
                type Error = TaskDomainError;

                fn try_from(value: &str) -> Result<Self, Self::Error> {
                    <Self as TaskLabel>::parse(value)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

label_conversions!(TaskStatus, TaskPriority, DifficultyLevel);

/// Serde adapter encoding `None` as the empty string used for unset fields.
pub(crate) mod optional_label {
    use super::TaskLabel;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: TaskLabel,
        S: Serializer,
    {
        serializer.serialize_str(value.map_or("", T::as_str))
    }

    pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: TaskLabel,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => T::parse(value).map(Some).map_err(D::Error::custom),
        }
    }
}
