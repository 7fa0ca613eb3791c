//! Service layer for one open project board.

use crate::preferences::{
    domain::{ColumnVisibility, TaskColumn, ViewMode, ViewPreferences},
    ports::PreferenceStore,
    services::PreferenceService,
};
use crate::sync::{EventOutcome, TaskCollection, TaskEvent};
use crate::task::{
    domain::{Milestone, ProjectId, Task, TaskId, UserId},
    ports::{TaskSource, TaskSourceError},
};
use crate::view::{
    domain::{
        FilterContext, FilterCriteria, MilestoneGroups, QuadrantBuckets, SortKey, SortSpec,
        StatusColumns, TranslatedLabels,
    },
    pipeline,
};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The task source rejected or failed the request.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Settings fixed for the lifetime of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardConfig {
    project_id: ProjectId,
    current_user: Option<UserId>,
    labels: TranslatedLabels,
}

impl TaskBoardConfig {
    /// Creates a configuration for a project viewed anonymously.
    #[must_use]
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            current_user: None,
            labels: TranslatedLabels::default(),
        }
    }

    /// Sets the viewing user for "mine only" filtering.
    #[must_use]
    pub const fn with_current_user(mut self, user: UserId) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Sets the labels free-text search matches against.
    #[must_use]
    pub fn with_labels(mut self, labels: TranslatedLabels) -> Self {
        self.labels = labels;
        self
    }
}

#[derive(Debug)]
struct BoardState {
    collection: TaskCollection,
    milestones: Vec<Milestone>,
    preferences: ViewPreferences,
}

/// Bookkeeping for the refresh currently in flight.
///
/// Held in a synchronous mutex so a cancelled refresh can clear its entry
/// from `Drop`. Never held across an await point.
#[derive(Debug, Default)]
struct RefreshTracker {
    latest: u64,
    in_flight: Option<u64>,
    buffered: Vec<TaskEvent>,
}

/// Ends the in-flight period of one refresh generation when dropped, so a
/// refresh future dropped mid-fetch stops buffering events.
struct RefreshGuard<'a> {
    tracker: &'a Mutex<RefreshTracker>,
    generation: u64,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        let mut tracker = self.tracker.lock().unwrap_or_else(PoisonError::into_inner);
        if tracker.in_flight == Some(self.generation) {
            tracker.in_flight = None;
            tracker.buffered.clear();
        }
    }
}

/// Orchestrates fetching, real-time updates, preferences, and rendering for
/// one project.
pub struct TaskBoardService<S, P, C>
where
    S: TaskSource,
    P: PreferenceStore,
    C: Clock + Send + Sync,
{
    config: TaskBoardConfig,
    source: Arc<S>,
    preferences: PreferenceService<P>,
    clock: Arc<C>,
    state: RwLock<BoardState>,
    refresh: Mutex<RefreshTracker>,
}

impl<S, P, C> TaskBoardService<S, P, C>
where
    S: TaskSource,
    P: PreferenceStore,
    C: Clock + Send + Sync,
{
    /// Creates a board and restores persisted preferences.
    ///
    /// The task collection starts empty; call [`Self::refresh`] to load it.
    #[must_use]
    pub fn new(config: TaskBoardConfig, source: Arc<S>, store: Arc<P>, clock: Arc<C>) -> Self {
        let preferences = PreferenceService::new(store);
        let restored = preferences.load();
        let state = BoardState {
            collection: TaskCollection::new(config.project_id),
            milestones: Vec::new(),
            preferences: restored,
        };
        Self {
            config,
            source,
            preferences,
            clock,
            state: RwLock::new(state),
            refresh: Mutex::new(RefreshTracker::default()),
        }
    }

    /// Returns the project this board shows.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.config.project_id
    }

    fn tracker(&self) -> MutexGuard<'_, RefreshTracker> {
        self.refresh.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns whether a refresh is waiting on the task source.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.tracker().in_flight.is_some()
    }

    /// Fetches the project's tasks and milestones and installs them.
    ///
    /// Events applied while the fetch is in flight are replayed on top of
    /// the fetched list. A response to a superseded refresh is discarded.
    /// On failure the previous tasks stay in place. Dropping the returned
    /// future before it completes abandons the refresh.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Source`] when either fetch fails.
    pub async fn refresh(&self) -> TaskBoardResult<usize> {
        let project_id = self.project_id();
        let generation = {
            let mut tracker = self.tracker();
            let generation = tracker.latest + 1;
            tracker.latest = generation;
            tracker.in_flight = Some(generation);
            tracker.buffered.clear();
            generation
        };
        let _guard = RefreshGuard {
            tracker: &self.refresh,
            generation,
        };

        let fetched = self.fetch(project_id).await;

        let mut state = self.state.write().await;
        let replay = {
            let mut tracker = self.tracker();
            if tracker.latest == generation {
                tracker.in_flight = None;
                Some(std::mem::take(&mut tracker.buffered))
            } else {
                None
            }
        };
        let Some(replay) = replay else {
            debug!(project_id = %project_id, generation, "discarding superseded task fetch");
            return fetched.map(|_| state.collection.len());
        };

        let (tasks, milestones) = match fetched {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    project_id = %project_id,
                    error = %err,
                    "task fetch failed, keeping previous tasks"
                );
                return Err(err);
            }
        };

        state.collection.replace_all(tasks);
        state.milestones = milestones;
        let replayed = replay.len();
        // The fetched list is already current, so moves needing a reload
        // are not followed up here.
        for event in replay {
            state.collection.apply(event);
        }
        info!(
            project_id = %project_id,
            tasks = state.collection.len(),
            replayed,
            "loaded project tasks"
        );
        Ok(state.collection.len())
    }

    async fn fetch(&self, project_id: ProjectId) -> TaskBoardResult<(Vec<Task>, Vec<Milestone>)> {
        let tasks = self.source.list_tasks(project_id).await?;
        let milestones = self.source.list_milestones(project_id).await?;
        Ok((tasks, milestones))
    }

    /// Applies a real-time event to the board's tasks.
    ///
    /// Events the collection cannot apply on its own, such as a task moving
    /// into this project, trigger a [`Self::refresh`]. A failed reload is
    /// logged and leaves the previous tasks in place.
    pub async fn apply_event(&self, event: TaskEvent) -> EventOutcome {
        let outcome = {
            let mut state = self.state.write().await;
            {
                let mut tracker = self.tracker();
                if tracker.in_flight.is_some() {
                    tracker.buffered.push(event.clone());
                }
            }
            state.collection.apply(event)
        };
        if outcome != EventOutcome::RefreshRequired {
            return outcome;
        }
        if let Err(err) = self.refresh().await {
            warn!(
                project_id = %self.project_id(),
                error = %err,
                "reload after task event failed"
            );
        }
        outcome
    }

    /// Creates a task through the source and adds the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Source`] when the source rejects the task.
    pub async fn create_task(&self, task: Task) -> TaskBoardResult<Task> {
        let created = self.source.create_task(&task).await?;
        self.apply_event(TaskEvent::Created {
            task: created.clone(),
        })
        .await;
        Ok(created)
    }

    /// Updates a task through the source and replaces the local record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Source`] when the source rejects the update.
    pub async fn update_task(&self, task: Task) -> TaskBoardResult<Task> {
        let updated = self.source.update_task(&task).await?;
        self.apply_event(TaskEvent::Updated {
            task: updated.clone(),
        })
        .await;
        Ok(updated)
    }

    /// Deletes a task through the source and removes the local record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Source`] when the source rejects the delete.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<Task> {
        let deleted = self.source.delete_task(id).await?;
        self.apply_event(TaskEvent::Deleted { task_id: id }).await;
        Ok(deleted)
    }

    /// Returns every task held by the board, unfiltered.
    pub async fn all_tasks(&self) -> Vec<Task> {
        self.state.read().await.collection.tasks().to_vec()
    }

    /// Returns the milestones fetched with the last refresh.
    pub async fn milestones(&self) -> Vec<Milestone> {
        self.state.read().await.milestones.clone()
    }

    /// Returns a snapshot of the current preferences.
    pub async fn preferences(&self) -> ViewPreferences {
        self.state.read().await.preferences.clone()
    }

    /// Replaces the filter criteria and persists them.
    ///
    /// The store is written after the board state is released.
    pub async fn set_criteria(&self, criteria: FilterCriteria) {
        self.state.write().await.preferences.criteria = criteria.clone();
        if let Err(err) = self.preferences.save_criteria(&criteria) {
            warn!(error = %err, "failed to persist filter criteria");
        }
    }

    /// Clears every filter.
    pub async fn reset_criteria(&self) {
        self.set_criteria(FilterCriteria::default()).await;
    }

    /// Applies a click on a sortable column and returns the new sort spec.
    pub async fn select_sort(&self, key: SortKey) -> SortSpec {
        let sort = {
            let mut state = self.state.write().await;
            let sort = state.preferences.sort.select(key);
            state.preferences.sort = sort;
            sort
        };
        if let Err(err) = self.preferences.save_sort(&sort) {
            warn!(error = %err, "failed to persist sort spec");
        }
        sort
    }

    /// Switches the view mode.
    pub async fn set_view_mode(&self, mode: ViewMode) {
        self.state.write().await.preferences.view_mode = mode;
        if let Err(err) = self.preferences.save_view_mode(mode) {
            warn!(error = %err, "failed to persist view mode");
        }
    }

    /// Shows or hides a column in one view mode.
    pub async fn set_column_visible(&self, mode: ViewMode, column: TaskColumn, visible: bool) {
        let visibility = {
            let mut state = self.state.write().await;
            let mut visibility = state.preferences.columns_for(mode);
            visibility.set(column, visible);
            state.preferences.columns.insert(mode, visibility.clone());
            visibility
        };
        if let Err(err) = self.preferences.save_columns(mode, &visibility) {
            warn!(error = %err, view_mode = %mode, "failed to persist column visibility");
        }
    }

    /// Returns the column visibility for a view mode.
    pub async fn columns(&self, mode: ViewMode) -> ColumnVisibility {
        self.state.read().await.preferences.columns_for(mode)
    }

    fn context(&self) -> FilterContext<'_> {
        let context = FilterContext::new(self.clock.utc()).with_labels(&self.config.labels);
        match self.config.current_user {
            Some(user) => context.with_current_user(user),
            None => context,
        }
    }

    /// Returns the filtered, sorted tasks for list, table, calendar, and
    /// Gantt views.
    pub async fn visible_tasks(&self) -> Vec<Task> {
        let state = self.state.read().await;
        let filtered = pipeline::filter(
            state.collection.tasks(),
            &state.preferences.criteria,
            &self.context(),
        );
        pipeline::sort(&filtered, state.preferences.sort)
    }

    /// Returns the visible tasks in impact/effort quadrants.
    pub async fn quadrants(&self) -> QuadrantBuckets {
        pipeline::classify(&self.visible_tasks().await)
    }

    /// Returns the visible tasks grouped by active milestone.
    pub async fn milestone_groups(&self) -> MilestoneGroups {
        let visible = self.visible_tasks().await;
        let state = self.state.read().await;
        pipeline::group_by_milestone(&visible, &state.milestones)
    }

    /// Returns the visible tasks laid out in board columns.
    pub async fn status_columns(&self) -> StatusColumns {
        pipeline::group_by_status(&self.visible_tasks().await)
    }
}
