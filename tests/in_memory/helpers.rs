//! Shared test helpers for in-memory adapter integration tests.

use camino::Utf8PathBuf;
use rstest::fixture;
use std::io;
use taskdeck::task::{
    adapters::memory::InMemoryTaskSource,
    domain::{ProjectId, Task},
    ports::TaskSource,
};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory task source for each test.
#[fixture]
pub fn source() -> InMemoryTaskSource {
    InMemoryTaskSource::new()
}

/// Provides a project ID for tests.
#[fixture]
pub fn project_id() -> ProjectId {
    ProjectId::new()
}

/// Scratch directory removed when dropped.
pub struct ScratchDir {
    /// Directory path.
    pub path: Utf8PathBuf,
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Provides an empty scratch directory under the system temp dir.
#[fixture]
pub fn scratch_dir() -> ScratchDir {
    let base = Utf8PathBuf::from_path_buf(std::env::temp_dir())
        .unwrap_or_else(|path| panic!("temp dir is not UTF-8: {}", path.display()));
    let path = base.join(format!("taskdeck-it-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&path).expect("scratch dir creation");
    ScratchDir { path }
}

/// Stores tasks in the source in order.
///
/// # Errors
///
/// Returns an error if any task is rejected.
pub fn seed_tasks(
    rt: &Runtime,
    source: &InMemoryTaskSource,
    tasks: &[Task],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for task in tasks {
        rt.block_on(source.create_task(task))?;
    }
    Ok(())
}
