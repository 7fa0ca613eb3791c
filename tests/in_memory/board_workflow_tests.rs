//! Board workflow tests over [`InMemoryTaskSource`].
//!
//! Covers the fetch, filter, sort, and live update path end to end.

use crate::in_memory::helpers::{project_id, runtime, seed_tasks, source};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use taskdeck::{
    board::services::{TaskBoardConfig, TaskBoardService},
    preferences::adapters::InMemoryPreferenceStore,
    sync::TaskEvent,
    task::{
        adapters::memory::InMemoryTaskSource,
        domain::{DifficultyLevel, Milestone, ProjectId, Task, TaskPriority, TaskStatus},
    },
    view::domain::{FilterCriteria, InclusionMap, Quadrant, SortKey},
};
use tokio::runtime::Runtime;

fn names(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.name().to_owned()).collect()
}

/// Tests that a board follows the source through a full editing session.
#[rstest]
fn board_tracks_fetch_events_and_preferences(
    runtime: io::Result<Runtime>,
    source: InMemoryTaskSource,
    project_id: ProjectId,
) {
    let rt = runtime.expect("runtime creation");
    let sprint = Milestone::new(project_id, "Sprint 12");
    source.add_milestone(sprint.clone()).expect("milestone");
    seed_tasks(
        &rt,
        &source,
        &[
            Task::new(project_id, "Audit logs")
                .with_priority(TaskPriority::High)
                .with_difficulty(DifficultyLevel::Easy)
                .with_status(TaskStatus::ToDo)
                .with_milestone(sprint.to_ref()),
            Task::new(project_id, "Rewrite scheduler")
                .with_priority(TaskPriority::Medium)
                .with_difficulty(DifficultyLevel::VeryDifficult)
                .with_status(TaskStatus::InProgress),
            Task::new(project_id, "Archive old boards")
                .with_priority(TaskPriority::Low)
                .with_status(TaskStatus::Done),
        ],
    )
    .expect("seed tasks");

    let store = Arc::new(InMemoryPreferenceStore::new());
    let board = TaskBoardService::new(
        TaskBoardConfig::new(project_id),
        Arc::new(source.clone()),
        Arc::clone(&store),
        Arc::new(DefaultClock),
    );
    let loaded = rt.block_on(board.refresh()).expect("refresh");
    assert_eq!(loaded, 3);

    rt.block_on(board.set_criteria(FilterCriteria {
        status: InclusionMap::new().with(Some(TaskStatus::Done), false),
        ..FilterCriteria::default()
    }));
    rt.block_on(board.select_sort(SortKey::Priority));
    rt.block_on(board.select_sort(SortKey::Priority));
    assert_eq!(
        names(&rt.block_on(board.visible_tasks())),
        vec!["Audit logs", "Rewrite scheduler"]
    );

    let quadrants = rt.block_on(board.quadrants());
    assert_eq!(
        names(quadrants.get(Quadrant::HighImpactLowEffort)),
        vec!["Audit logs"]
    );
    assert_eq!(
        names(quadrants.get(Quadrant::HighImpactHighEffort)),
        vec!["Rewrite scheduler"]
    );

    let audit = rt
        .block_on(board.all_tasks())
        .into_iter()
        .find(|task| task.name() == "Audit logs")
        .expect("audit task");
    rt.block_on(board.apply_event(TaskEvent::Updated {
        task: audit.with_status(TaskStatus::Done),
    }));
    assert_eq!(
        names(&rt.block_on(board.visible_tasks())),
        vec!["Rewrite scheduler"]
    );
    let groups = rt.block_on(board.milestone_groups());
    assert_eq!(
        groups.group(&sprint).map(|group| group.tasks.len()),
        Some(0)
    );

    let reopened = TaskBoardService::new(
        TaskBoardConfig::new(project_id),
        Arc::new(source),
        store,
        Arc::new(DefaultClock),
    );
    rt.block_on(reopened.refresh()).expect("refresh reopened");
    assert_eq!(
        names(&rt.block_on(reopened.visible_tasks())),
        vec!["Audit logs", "Rewrite scheduler"]
    );
}

/// Tests that a task moved to another project leaves the board.
#[rstest]
fn moved_task_leaves_the_board(
    runtime: io::Result<Runtime>,
    source: InMemoryTaskSource,
    project_id: ProjectId,
) {
    let rt = runtime.expect("runtime creation");
    let task = Task::new(project_id, "Migrate");
    seed_tasks(&rt, &source, std::slice::from_ref(&task)).expect("seed tasks");
    let board = TaskBoardService::new(
        TaskBoardConfig::new(project_id),
        Arc::new(source),
        Arc::new(InMemoryPreferenceStore::new()),
        Arc::new(DefaultClock),
    );
    rt.block_on(board.refresh()).expect("refresh");

    rt.block_on(board.apply_event(TaskEvent::Moved {
        task_id: Some(task.id()),
        old_project_id: project_id,
        new_project_id: ProjectId::new(),
    }));

    assert!(rt.block_on(board.all_tasks()).is_empty());
}
