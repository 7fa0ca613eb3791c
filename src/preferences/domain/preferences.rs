//! Preference snapshot and storage keys.

use super::{ColumnVisibility, ViewMode};
use crate::view::domain::{FilterCriteria, SortSpec};
use std::collections::BTreeMap;
use std::fmt;

/// Storage key for one persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Filter criteria.
    Filters,
    /// Sort spec.
    Sort,
    /// Selected view mode.
    ViewMode,
    /// Column visibility for one view mode.
    Columns(ViewMode),
}

impl PreferenceKey {
    /// Returns the key under which the preference is stored.
    #[must_use]
    pub fn storage_key(self) -> String {
        match self {
            Self::Filters => "taskdeck.filters".to_owned(),
            Self::Sort => "taskdeck.sort".to_owned(),
            Self::ViewMode => "taskdeck.view_mode".to_owned(),
            Self::Columns(mode) => format!("taskdeck.columns.{mode}"),
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// Every persisted view preference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewPreferences {
    /// Active filter criteria.
    pub criteria: FilterCriteria,
    /// Active sort spec.
    pub sort: SortSpec,
    /// Selected view mode.
    pub view_mode: ViewMode,
    /// Column visibility per view mode; absent modes show every column.
    pub columns: BTreeMap<ViewMode, ColumnVisibility>,
}

impl ViewPreferences {
    /// Returns the column visibility for a view mode.
    #[must_use]
    pub fn columns_for(&self, mode: ViewMode) -> ColumnVisibility {
        self.columns.get(&mode).cloned().unwrap_or_default()
    }
}
