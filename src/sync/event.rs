//! Task events pushed by the real-time channel.

use crate::task::domain::{ProjectId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A change notification for a project's tasks.
///
/// Encoded as JSON with a `type` tag, e.g.
/// `{"type":"taskDeleted","taskId":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskEvent {
    /// A task was created.
    #[serde(rename = "taskCreated")]
    Created {
        /// The stored record.
        task: Task,
    },
    /// A task was changed.
    #[serde(rename = "taskUpdated")]
    Updated {
        /// The full updated record.
        task: Task,
    },
    /// A task was deleted.
    #[serde(rename = "taskDeleted", rename_all = "camelCase")]
    Deleted {
        /// The deleted task.
        task_id: TaskId,
    },
    /// A task was moved between projects.
    ///
    /// The server may omit the task identifier; consumers then reload the
    /// affected project.
    #[serde(rename = "taskMoved", rename_all = "camelCase")]
    Moved {
        /// The moved task, when the server names it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_id: Option<TaskId>,
        /// Project the task left.
        old_project_id: ProjectId,
        /// Project the task joined.
        new_project_id: ProjectId,
    },
}

impl TaskEvent {
    /// Returns the identifier of the task the event concerns, if known.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Created { task } | Self::Updated { task } => Some(task.id()),
            Self::Deleted { task_id } => Some(*task_id),
            Self::Moved { task_id, .. } => *task_id,
        }
    }

    /// Returns the event name used on the wire.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "taskCreated",
            Self::Updated { .. } => "taskUpdated",
            Self::Deleted { .. } => "taskDeleted",
            Self::Moved { .. } => "taskMoved",
        }
    }
}

/// What applying an event did to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventOutcome {
    /// A new task was appended.
    Inserted,
    /// An existing task was replaced in place.
    Replaced,
    /// A task was removed.
    Removed,
    /// The event did not affect the collection.
    Ignored,
    /// The event concerns the collection but lacks the data to apply it;
    /// the project must be fetched again.
    RefreshRequired,
}
