//! Grouped task layouts for milestone lanes and board columns.

use crate::task::domain::{Milestone, Task, TaskStatus};

/// Tasks linked to one active milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneGroup {
    /// The milestone heading the group.
    pub milestone: Milestone,
    /// Member tasks in input order.
    pub tasks: Vec<Task>,
}

/// Tasks grouped by active milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneGroups {
    /// One group per active milestone, in the order milestones were supplied.
    pub groups: Vec<MilestoneGroup>,
    /// Tasks without a reference to an active milestone.
    pub ungrouped: Vec<Task>,
}

impl MilestoneGroups {
    /// Returns the group for a milestone, if it is active.
    #[must_use]
    pub fn group(&self, milestone: &Milestone) -> Option<&MilestoneGroup> {
        self.groups
            .iter()
            .find(|group| group.milestone.id == milestone.id)
    }
}

/// Tasks in one board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColumn {
    /// Column status; `None` collects tasks whose status is unset.
    pub status: Option<TaskStatus>,
    /// Member tasks in input order.
    pub tasks: Vec<Task>,
}

/// Board columns in canonical status order, with the unset column last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusColumns {
    /// The columns.
    pub columns: Vec<StatusColumn>,
}

impl StatusColumns {
    /// Returns the tasks in the column for a status bucket.
    #[must_use]
    pub fn tasks(&self, status: Option<TaskStatus>) -> &[Task] {
        self.columns
            .iter()
            .find(|column| column.status == status)
            .map(|column| column.tasks.as_slice())
            .unwrap_or_default()
    }
}
