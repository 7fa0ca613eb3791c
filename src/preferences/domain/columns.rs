//! View modes and per-mode column visibility.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Layouts a project's tasks can be shown in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Kanban columns by status.
    #[default]
    Board,
    /// Flat list.
    List,
    /// Spreadsheet-like table.
    Table,
    /// Month calendar keyed by schedule dates.
    Calendar,
    /// Gantt timeline.
    Gantt,
}

impl ViewMode {
    /// Every view mode.
    pub const ALL: [Self; 5] = [
        Self::Board,
        Self::List,
        Self::Table,
        Self::Calendar,
        Self::Gantt,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::List => "list",
            Self::Table => "table",
            Self::Calendar => "calendar",
            Self::Gantt => "gantt",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task columns a view can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskColumn {
    /// Task name.
    Name,
    /// Workflow status.
    Status,
    /// Priority.
    Priority,
    /// Difficulty level.
    DifficultyLevel,
    /// Category.
    Category,
    /// Milestone.
    Milestone,
    /// Tags.
    Tags,
    /// Persons in charge.
    PersonsInCharge,
    /// Colour tag.
    Color,
    /// Estimated start date.
    EstimatedStartDate,
    /// Estimated end date.
    EstimatedEndDate,
    /// Actual start date.
    ActualStartDate,
    /// Actual end date.
    ActualEndDate,
    /// Creation stamp.
    Created,
    /// Latest update stamp.
    Updated,
    /// Attachment count.
    Attachments,
}

/// Visibility flags for one view mode's columns.
///
/// Columns without an entry are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility(BTreeMap<TaskColumn, bool>);

impl ColumnVisibility {
    /// Creates a visibility map that shows every column.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` when the column is shown.
    #[must_use]
    pub fn is_visible(&self, column: TaskColumn) -> bool {
        self.0.get(&column).copied().unwrap_or(true)
    }

    /// Shows or hides a column.
    pub fn set(&mut self, column: TaskColumn, visible: bool) {
        self.0.insert(column, visible);
    }

    /// Iterates over hidden columns.
    pub fn hidden(&self) -> impl Iterator<Item = TaskColumn> + '_ {
        self.0
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(column, _)| *column)
    }
}
