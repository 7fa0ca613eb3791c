//! Sort key and direction chosen for a task view.

use super::ParseSortKeyError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Task fields a view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Task name.
    Name,
    /// Milestone title.
    Milestone,
    /// Category.
    Category,
    /// Priority rank.
    Priority,
    /// Difficulty rank.
    DifficultyLevel,
    /// Estimated start date.
    EstimatedStartDate,
    /// Estimated end date.
    EstimatedEndDate,
    /// Actual start date.
    ActualStartDate,
    /// Actual end date.
    ActualEndDate,
    /// Creation instant.
    CreatedAt,
    /// Latest update instant.
    UpdatedAt,
}

impl SortKey {
    /// Every sortable key.
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::Milestone,
        Self::Category,
        Self::Priority,
        Self::DifficultyLevel,
        Self::EstimatedStartDate,
        Self::EstimatedEndDate,
        Self::ActualStartDate,
        Self::ActualEndDate,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Returns the canonical key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Milestone => "milestone",
            Self::Category => "category",
            Self::Priority => "priority",
            Self::DifficultyLevel => "difficultyLevel",
            Self::EstimatedStartDate => "estimatedStartDate",
            Self::EstimatedEndDate => "estimatedEndDate",
            Self::ActualStartDate => "actualStartDate",
            Self::ActualEndDate => "actualEndDate",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSortKeyError(value.to_owned()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    key: SortKey,
    direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort spec.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Returns the sort key.
    #[must_use]
    pub const fn key(&self) -> SortKey {
        self.key
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Applies a user's click on a sortable column.
    ///
    /// Choosing the current key toggles the direction; choosing another key
    /// sorts by it ascending.
    #[must_use]
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortKey::Name, SortDirection::Ascending)
    }
}
