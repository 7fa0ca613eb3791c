//! In-memory task source for tests and offline use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Milestone, ProjectId, Task, TaskId},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory task source.
///
/// Tasks keep insertion order so listings mirror server order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    milestones: Vec<Milestone>,
}

impl InMemoryTaskSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a milestone so it is served by
    /// [`TaskSource::list_milestones`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Remote`] when the state lock is poisoned.
    pub fn add_milestone(&self, milestone: Milestone) -> TaskSourceResult<()> {
        let mut state = self.write()?;
        state.milestones.retain(|existing| existing.id != milestone.id);
        state.milestones.push(milestone);
        Ok(())
    }

    fn read(&self) -> TaskSourceResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskSourceError::remote(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskSourceResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskSourceError::remote(std::io::Error::other(err.to_string())))
    }
}

fn position_of(state: &InMemoryTaskState, id: TaskId) -> TaskSourceResult<usize> {
    state
        .tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or(TaskSourceError::NotFound(id))
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn list_tasks(&self, project_id: ProjectId) -> TaskSourceResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn list_milestones(&self, project_id: ProjectId) -> TaskSourceResult<Vec<Milestone>> {
        let state = self.read()?;
        Ok(state
            .milestones
            .iter()
            .filter(|milestone| milestone.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, task: &Task) -> TaskSourceResult<Task> {
        let mut state = self.write()?;
        if state.tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskSourceError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn update_task(&self, task: &Task) -> TaskSourceResult<Task> {
        let mut state = self.write()?;
        let index = position_of(&state, task.id())?;
        if let Some(slot) = state.tasks.get_mut(index) {
            *slot = task.clone();
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: TaskId) -> TaskSourceResult<Task> {
        let mut state = self.write()?;
        let index = position_of(&state, id)?;
        Ok(state.tasks.remove(index))
    }
}
