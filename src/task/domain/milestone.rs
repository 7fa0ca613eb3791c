//! Project milestones and task references to them.

use super::{MilestoneId, ProjectId, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneState {
    /// The milestone is open and eligible for grouping.
    Active,
    /// The milestone has been closed or archived.
    Archived,
}

impl MilestoneState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for MilestoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MilestoneState {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "archived" | "closed" => Ok(Self::Archived),
            _ => Err(TaskDomainError::UnknownMilestoneState(value.to_owned())),
        }
    }
}

/// A project milestone as served by the project API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Milestone identifier.
    pub id: MilestoneId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Display title.
    pub title: String,
    /// Lifecycle state.
    pub state: MilestoneState,
}

impl Milestone {
    /// Creates an active milestone with a fresh identifier.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id: MilestoneId::new(),
            project_id,
            title: title.into(),
            state: MilestoneState::Active,
        }
    }

    /// Marks the milestone as archived.
    #[must_use]
    pub const fn archived(mut self) -> Self {
        self.state = MilestoneState::Archived;
        self
    }

    /// Returns `true` when the milestone is eligible for grouping.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, MilestoneState::Active)
    }

    /// Returns the reference a task stores for this milestone.
    #[must_use]
    pub fn to_ref(&self) -> MilestoneRef {
        MilestoneRef {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// Milestone reference embedded in a task record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilestoneRef {
    /// Referenced milestone.
    pub id: MilestoneId,
    /// Title at the time the task was served.
    #[serde(default)]
    pub title: String,
}
