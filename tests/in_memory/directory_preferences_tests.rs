//! Preference persistence through [`DirectoryPreferenceStore`].

use crate::in_memory::helpers::{ScratchDir, project_id, runtime, scratch_dir, source};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use taskdeck::{
    board::services::{TaskBoardConfig, TaskBoardService},
    preferences::{
        adapters::DirectoryPreferenceStore,
        domain::{TaskColumn, ViewMode},
    },
    task::{adapters::memory::InMemoryTaskSource, domain::ProjectId},
    view::domain::{FilterCriteria, SortDirection, SortKey, SortSpec},
};
use tokio::runtime::Runtime;

fn open_board(
    dir: &ScratchDir,
    source: &InMemoryTaskSource,
    project_id: ProjectId,
) -> TaskBoardService<InMemoryTaskSource, DirectoryPreferenceStore, DefaultClock> {
    let store = DirectoryPreferenceStore::open(&dir.path).expect("open preference dir");
    TaskBoardService::new(
        TaskBoardConfig::new(project_id),
        Arc::new(source.clone()),
        Arc::new(store),
        Arc::new(DefaultClock),
    )
}

/// Tests that view preferences survive reopening the directory.
#[rstest]
fn preferences_survive_reopening_the_directory(
    runtime: io::Result<Runtime>,
    scratch_dir: ScratchDir,
    source: InMemoryTaskSource,
    project_id: ProjectId,
) {
    let rt = runtime.expect("runtime creation");
    let board = open_board(&scratch_dir, &source, project_id);
    let criteria = FilterCriteria {
        mine_only: true,
        ..FilterCriteria::default()
    };

    rt.block_on(board.set_criteria(criteria.clone()));
    rt.block_on(board.select_sort(SortKey::UpdatedAt));
    rt.block_on(board.set_view_mode(ViewMode::Calendar));
    rt.block_on(board.set_column_visible(ViewMode::Calendar, TaskColumn::Color, false));
    drop(board);

    let restored = rt.block_on(open_board(&scratch_dir, &source, project_id).preferences());
    assert_eq!(restored.criteria, criteria);
    assert_eq!(restored.sort.key(), SortKey::UpdatedAt);
    assert_eq!(restored.sort.direction(), SortDirection::Ascending);
    assert_eq!(restored.view_mode, ViewMode::Calendar);
    assert!(!restored.columns_for(ViewMode::Calendar).is_visible(TaskColumn::Color));
    assert!(scratch_dir.path.join("taskdeck.filters.json").exists());
}

/// Tests that a corrupted file resets only its own preference.
#[rstest]
fn corrupted_file_resets_only_its_preference(
    runtime: io::Result<Runtime>,
    scratch_dir: ScratchDir,
    source: InMemoryTaskSource,
    project_id: ProjectId,
) {
    let rt = runtime.expect("runtime creation");
    let board = open_board(&scratch_dir, &source, project_id);
    rt.block_on(board.set_view_mode(ViewMode::Table));
    rt.block_on(board.select_sort(SortKey::Category));
    std::fs::write(scratch_dir.path.join("taskdeck.sort.json"), "not json")
        .expect("corrupt sort file");

    let restored = rt.block_on(open_board(&scratch_dir, &source, project_id).preferences());

    assert_eq!(restored.view_mode, ViewMode::Table);
    assert_eq!(restored.sort, SortSpec::default());
}
