//! Key-value store port for client-local preferences.

use std::sync::Arc;
use thiserror::Error;

/// Result type for preference store operations.
pub type PreferenceStoreResult<T> = Result<T, PreferenceStoreError>;

/// Client-local key-value persistence contract.
pub trait PreferenceStore: Send + Sync {
    /// Returns the raw value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the backing storage fails.
    fn load(&self, key: &str) -> PreferenceStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the backing storage fails.
    fn save(&self, key: &str, value: &str) -> PreferenceStoreResult<()>;
}

/// Errors returned by preference stores and the preference service.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// The key contains characters the store cannot represent.
    #[error("invalid preference key: {0}")]
    InvalidKey(String),

    /// The preference could not be encoded.
    #[error("failed to encode preference '{key}': {source}")]
    Encoding {
        /// Key being written.
        key: String,
        /// Underlying encoder error.
        source: Arc<serde_json::Error>,
    },

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferenceStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
