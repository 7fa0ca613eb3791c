//! In-memory preference store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::preferences::ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};

/// Thread-safe in-memory preference store.
///
/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> PreferenceStoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| {
            PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> PreferenceStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
