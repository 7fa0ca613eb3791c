//! Port contracts for preference persistence.

pub mod store;

pub use store::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};
