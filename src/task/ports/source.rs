//! Source port for fetching and mutating project tasks.

use crate::task::domain::{Milestone, ProjectId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Remote task API contract.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns every task of a project in server order.
    async fn list_tasks(&self, project_id: ProjectId) -> TaskSourceResult<Vec<Task>>;

    /// Returns every milestone of a project, active or archived.
    async fn list_milestones(&self, project_id: ProjectId) -> TaskSourceResult<Vec<Milestone>>;

    /// Creates a task and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::DuplicateTask`] when the task ID already
    /// exists.
    async fn create_task(&self, task: &Task) -> TaskSourceResult<Task>;

    /// Replaces an existing task and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when the task does not exist.
    async fn update_task(&self, task: &Task) -> TaskSourceResult<Task>;

    /// Deletes a task and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when the task does not exist.
    async fn delete_task(&self, id: TaskId) -> TaskSourceResult<Task>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Transport or server failure.
    #[error("remote error: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a transport or server error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
