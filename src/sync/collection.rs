//! In-memory task collection for one project.

use super::{EventOutcome, TaskEvent};
use crate::task::domain::{ProjectId, Task, TaskId};
use tracing::debug;

/// The tasks of one project, in server order, kept current by events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCollection {
    project_id: ProjectId,
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection for a project.
    #[must_use]
    pub const fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            tasks: Vec::new(),
        }
    }

    /// Returns the project the collection mirrors.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the tasks in order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Installs a freshly fetched task list, discarding the previous one.
    ///
    /// Tasks belonging to other projects are dropped.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let project_id = self.project_id;
        self.tasks = tasks
            .into_iter()
            .filter(|task| task.project_id() == project_id)
            .collect();
    }

    /// Applies one real-time event.
    pub fn apply(&mut self, event: TaskEvent) -> EventOutcome {
        let kind = event.kind();
        let task_id = event.task_id();
        let outcome = match event {
            TaskEvent::Created { task } => self.upsert(task),
            TaskEvent::Updated { task } => self.replace(task),
            TaskEvent::Deleted { task_id } => self.remove(task_id),
            TaskEvent::Moved {
                task_id,
                old_project_id,
                new_project_id,
            } => self.apply_move(task_id, old_project_id, new_project_id),
        };
        debug!(
            project_id = %self.project_id,
            task_id = ?task_id,
            event = kind,
            outcome = ?outcome,
            "applied task event"
        );
        outcome
    }

    // A task moving in is never carried by the event, and an unnamed task
    // moving out cannot be matched, so both need a fresh fetch.
    fn apply_move(
        &mut self,
        task_id: Option<TaskId>,
        old_project_id: ProjectId,
        new_project_id: ProjectId,
    ) -> EventOutcome {
        if old_project_id == new_project_id {
            return EventOutcome::Ignored;
        }
        if new_project_id == self.project_id {
            return EventOutcome::RefreshRequired;
        }
        if old_project_id != self.project_id {
            return EventOutcome::Ignored;
        }
        match task_id {
            Some(id) => self.remove(id),
            None => EventOutcome::RefreshRequired,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn upsert(&mut self, task: Task) -> EventOutcome {
        if task.project_id() != self.project_id {
            return EventOutcome::Ignored;
        }
        match self.position(task.id()).and_then(|index| self.tasks.get_mut(index)) {
            Some(slot) => {
                *slot = task;
                EventOutcome::Replaced
            }
            None => {
                self.tasks.push(task);
                EventOutcome::Inserted
            }
        }
    }

    fn replace(&mut self, task: Task) -> EventOutcome {
        let Some(index) = self.position(task.id()) else {
            return EventOutcome::Ignored;
        };
        if task.project_id() != self.project_id {
            self.tasks.remove(index);
            return EventOutcome::Removed;
        }
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = task;
                EventOutcome::Replaced
            }
            None => EventOutcome::Ignored,
        }
    }

    fn remove(&mut self, id: TaskId) -> EventOutcome {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                EventOutcome::Removed
            }
            None => EventOutcome::Ignored,
        }
    }
}
