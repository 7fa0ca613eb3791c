//! Loads and saves view preferences through a preference store.

use crate::preferences::{
    domain::{ColumnVisibility, PreferenceKey, ViewMode, ViewPreferences},
    ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult},
};
use crate::view::domain::{FilterCriteria, SortSpec};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Preference persistence service.
///
/// Each preference lives under its own key, so one malformed entry resets
/// only that preference.
#[derive(Debug)]
pub struct PreferenceService<P>
where
    P: PreferenceStore,
{
    store: Arc<P>,
}

impl<P> Clone for PreferenceService<P>
where
    P: PreferenceStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<P> PreferenceService<P>
where
    P: PreferenceStore,
{
    /// Creates a preference service over a store.
    #[must_use]
    pub const fn new(store: Arc<P>) -> Self {
        Self { store }
    }

    /// Loads every preference, substituting defaults for missing or
    /// malformed entries.
    #[must_use]
    pub fn load(&self) -> ViewPreferences {
        let columns: BTreeMap<ViewMode, ColumnVisibility> = ViewMode::ALL
            .into_iter()
            .filter_map(|mode| {
                self.load_entry::<ColumnVisibility>(PreferenceKey::Columns(mode))
                    .map(|visibility| (mode, visibility))
            })
            .collect();

        ViewPreferences {
            criteria: self.load_or_default(PreferenceKey::Filters),
            sort: self.load_or_default(PreferenceKey::Sort),
            view_mode: self.load_or_default(PreferenceKey::ViewMode),
            columns,
        }
    }

    /// Persists filter criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when encoding or storage fails.
    pub fn save_criteria(&self, criteria: &FilterCriteria) -> PreferenceStoreResult<()> {
        self.save_entry(PreferenceKey::Filters, criteria)
    }

    /// Persists the sort spec.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when encoding or storage fails.
    pub fn save_sort(&self, sort: &SortSpec) -> PreferenceStoreResult<()> {
        self.save_entry(PreferenceKey::Sort, sort)
    }

    /// Persists the selected view mode.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when encoding or storage fails.
    pub fn save_view_mode(&self, mode: ViewMode) -> PreferenceStoreResult<()> {
        self.save_entry(PreferenceKey::ViewMode, &mode)
    }

    /// Persists column visibility for one view mode.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when encoding or storage fails.
    pub fn save_columns(
        &self,
        mode: ViewMode,
        visibility: &ColumnVisibility,
    ) -> PreferenceStoreResult<()> {
        self.save_entry(PreferenceKey::Columns(mode), visibility)
    }

    /// Persists every preference.
    ///
    /// # Errors
    ///
    /// Returns the first [`PreferenceStoreError`] encountered.
    pub fn save_all(&self, preferences: &ViewPreferences) -> PreferenceStoreResult<()> {
        self.save_criteria(&preferences.criteria)?;
        self.save_sort(&preferences.sort)?;
        self.save_view_mode(preferences.view_mode)?;
        for (mode, visibility) in &preferences.columns {
            self.save_columns(*mode, visibility)?;
        }
        Ok(())
    }

    fn load_or_default<T>(&self, key: PreferenceKey) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.load_entry(key).unwrap_or_default()
    }

    fn load_entry<T>(&self, key: PreferenceKey) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let storage_key = key.storage_key();
        let raw = match self.store.load(&storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %storage_key, "no stored preference, using default");
                return None;
            }
            Err(err) => {
                warn!(
                    key = %storage_key,
                    error = %err,
                    "failed to read preference, using default"
                );
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    key = %storage_key,
                    error = %err,
                    "malformed stored preference, using default"
                );
                None
            }
        }
    }

    fn save_entry<T>(&self, key: PreferenceKey, value: &T) -> PreferenceStoreResult<()>
    where
        T: Serialize + ?Sized,
    {
        let storage_key = key.storage_key();
        let encoded =
            serde_json::to_string(value).map_err(|err| PreferenceStoreError::Encoding {
                key: storage_key.clone(),
                source: Arc::new(err),
            })?;
        self.store.save(&storage_key, &encoded)
    }
}
