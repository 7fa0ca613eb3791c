//! Domain model for persisted view preferences.

mod columns;
mod preferences;

pub use columns::{ColumnVisibility, TaskColumn, ViewMode};
pub use preferences::{PreferenceKey, ViewPreferences};
