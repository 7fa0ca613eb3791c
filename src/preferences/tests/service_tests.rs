//! Tests for loading and saving view preferences.

use crate::preferences::{
    adapters::InMemoryPreferenceStore,
    domain::{ColumnVisibility, PreferenceKey, TaskColumn, ViewMode, ViewPreferences},
    ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult},
    services::PreferenceService,
};
use crate::task::domain::TaskStatus;
use crate::view::domain::{FilterCriteria, InclusionMap, SortDirection, SortKey, SortSpec};
use eyre::{Result, ensure};
use mockall::{mock, predicate::eq};
use rstest::{fixture, rstest};
use std::sync::Arc;

mock! {
    pub Store {}

    impl PreferenceStore for Store {
        fn load(&self, key: &str) -> PreferenceStoreResult<Option<String>>;
        fn save(&self, key: &str, value: &str) -> PreferenceStoreResult<()>;
    }
}

#[fixture]
fn store() -> Arc<InMemoryPreferenceStore> {
    Arc::new(InMemoryPreferenceStore::new())
}

fn customised() -> ViewPreferences {
    let mut columns = ColumnVisibility::new();
    columns.set(TaskColumn::Attachments, false);
    ViewPreferences {
        criteria: FilterCriteria {
            status: InclusionMap::new().with(Some(TaskStatus::Done), false),
            overdue_only: true,
            ..FilterCriteria::default()
        },
        sort: SortSpec::new(SortKey::Priority, SortDirection::Descending),
        view_mode: ViewMode::Table,
        columns: [(ViewMode::Table, columns)].into_iter().collect(),
    }
}

#[rstest]
fn empty_store_loads_defaults(store: Arc<InMemoryPreferenceStore>) {
    let service = PreferenceService::new(store);

    assert_eq!(service.load(), ViewPreferences::default());
}

#[rstest]
fn saved_preferences_load_back_unchanged(store: Arc<InMemoryPreferenceStore>) -> Result<()> {
    let preferences = customised();
    PreferenceService::new(Arc::clone(&store)).save_all(&preferences)?;

    let restored = PreferenceService::new(store).load();

    ensure!(restored == preferences);
    let table = restored.columns_for(ViewMode::Table);
    ensure!(!table.is_visible(TaskColumn::Attachments));
    ensure!(restored.columns_for(ViewMode::Board).is_visible(TaskColumn::Attachments));
    Ok(())
}

#[rstest]
fn malformed_entry_resets_only_that_preference(
    store: Arc<InMemoryPreferenceStore>,
) -> Result<()> {
    let preferences = customised();
    let service = PreferenceService::new(Arc::clone(&store));
    service.save_all(&preferences)?;
    store.save(&PreferenceKey::Filters.storage_key(), "{not json")?;

    let restored = service.load();

    ensure!(restored.criteria == FilterCriteria::default());
    ensure!(restored.sort == preferences.sort);
    ensure!(restored.view_mode == ViewMode::Table);
    Ok(())
}

#[rstest]
fn unknown_labels_in_stored_criteria_fall_back_to_default(
    store: Arc<InMemoryPreferenceStore>,
) -> Result<()> {
    store.save("taskdeck.filters", r#"{"status":{"Blocked":false}}"#)?;
    store.save("taskdeck.view_mode", r#""calendar""#)?;

    let restored = PreferenceService::new(store).load();

    ensure!(restored.criteria == FilterCriteria::default());
    ensure!(restored.view_mode == ViewMode::Calendar);
    Ok(())
}

#[rstest]
fn read_failures_fall_back_to_defaults() {
    let mut store = MockStore::new();
    store.expect_load().returning(|_| {
        Err(PreferenceStoreError::persistence(std::io::Error::other(
            "disk unavailable",
        )))
    });

    let restored = PreferenceService::new(Arc::new(store)).load();

    assert_eq!(restored, ViewPreferences::default());
}

#[rstest]
fn saves_use_per_preference_keys() -> Result<()> {
    let mut store = MockStore::new();
    store
        .expect_save()
        .with(eq("taskdeck.view_mode"), eq(r#""gantt""#))
        .times(1)
        .returning(|_, _| Ok(()));
    store
        .expect_save()
        .with(eq("taskdeck.columns.list"), eq(r#"{"tags":false}"#))
        .times(1)
        .returning(|_, _| Ok(()));
    let service = PreferenceService::new(Arc::new(store));
    let mut columns = ColumnVisibility::new();
    columns.set(TaskColumn::Tags, false);

    service.save_view_mode(ViewMode::Gantt)?;
    service.save_columns(ViewMode::List, &columns)?;
    Ok(())
}

#[rstest]
fn save_errors_propagate() {
    let mut store = MockStore::new();
    store
        .expect_save()
        .returning(|key, _| Err(PreferenceStoreError::InvalidKey(key.to_owned())));
    let service = PreferenceService::new(Arc::new(store));

    let result = service.save_sort(&SortSpec::default());

    assert!(matches!(
        result,
        Err(PreferenceStoreError::InvalidKey(key)) if key == "taskdeck.sort"
    ));
}

#[rstest]
#[case(PreferenceKey::Filters, "taskdeck.filters")]
#[case(PreferenceKey::Sort, "taskdeck.sort")]
#[case(PreferenceKey::ViewMode, "taskdeck.view_mode")]
#[case(PreferenceKey::Columns(ViewMode::Calendar), "taskdeck.columns.calendar")]
fn storage_keys_are_namespaced(#[case] key: PreferenceKey, #[case] expected: &str) {
    assert_eq!(key.storage_key(), expected);
}
