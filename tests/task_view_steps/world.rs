//! Shared world state for task board view scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::{
    board::services::{TaskBoardConfig, TaskBoardService},
    preferences::adapters::InMemoryPreferenceStore,
    task::{
        adapters::memory::InMemoryTaskSource,
        domain::{ProjectId, Task},
    },
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoardService<InMemoryTaskSource, InMemoryPreferenceStore, DefaultClock>;

/// Scenario world for task board view behaviour tests.
pub struct TaskViewWorld {
    pub project: ProjectId,
    pub source: Arc<InMemoryTaskSource>,
    pub store: Arc<InMemoryPreferenceStore>,
    pub board: TestBoard,
}

impl TaskViewWorld {
    /// Creates a world with an empty project and a fresh board.
    #[must_use]
    pub fn new() -> Self {
        let project = ProjectId::new();
        let source = Arc::new(InMemoryTaskSource::new());
        let store = Arc::new(InMemoryPreferenceStore::new());
        let board = open_board(project, &source, &store);
        Self {
            project,
            source,
            store,
            board,
        }
    }

    /// Replaces the board with a new one over the same source and store.
    pub fn reopen(&mut self) {
        self.board = open_board(self.project, &self.source, &self.store);
    }

    /// Finds a task on the board by name.
    pub fn task_named(&self, name: &str) -> Result<Task, eyre::Report> {
        run_async(self.board.all_tasks())
            .into_iter()
            .find(|task| task.name() == name)
            .ok_or_else(|| eyre::eyre!("no task named '{name}' on the board"))
    }
}

impl Default for TaskViewWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn open_board(
    project: ProjectId,
    source: &Arc<InMemoryTaskSource>,
    store: &Arc<InMemoryPreferenceStore>,
) -> TestBoard {
    TaskBoardService::new(
        TaskBoardConfig::new(project),
        Arc::clone(source),
        Arc::clone(store),
        Arc::new(DefaultClock),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskViewWorld {
    TaskViewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
