//! Display labels for enumerated task fields.
//!
//! Free-text search matches the labels a user actually sees, so the catalogue
//! is swappable per locale.

use crate::task::domain::{DifficultyLevel, TaskLabel, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source of user-facing labels for status, priority, and difficulty.
pub trait LabelCatalog: Send + Sync {
    /// Returns the label shown for a status.
    fn status_label(&self, status: TaskStatus) -> &str;

    /// Returns the label shown for a priority.
    fn priority_label(&self, priority: TaskPriority) -> &str;

    /// Returns the label shown for a difficulty level.
    fn difficulty_label(&self, difficulty: DifficultyLevel) -> &str;
}

/// Catalogue that shows the canonical wire labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalLabels;

impl LabelCatalog for CanonicalLabels {
    fn status_label(&self, status: TaskStatus) -> &str {
        status.as_str()
    }

    fn priority_label(&self, priority: TaskPriority) -> &str {
        priority.as_str()
    }

    fn difficulty_label(&self, difficulty: DifficultyLevel) -> &str {
        difficulty.as_str()
    }
}

/// Locale-specific labels loaded from configuration.
///
/// Missing entries fall back to the canonical label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatedLabels {
    statuses: BTreeMap<TaskStatus, String>,
    priorities: BTreeMap<TaskPriority, String>,
    difficulties: BTreeMap<DifficultyLevel, String>,
}

impl TranslatedLabels {
    /// Creates a catalogue with no translations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label for a status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus, label: impl Into<String>) -> Self {
        self.statuses.insert(status, label.into());
        self
    }

    /// Sets the label for a priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority, label: impl Into<String>) -> Self {
        self.priorities.insert(priority, label.into());
        self
    }

    /// Sets the label for a difficulty level.
    #[must_use]
    pub fn with_difficulty(
        mut self,
        difficulty: DifficultyLevel,
        label: impl Into<String>,
    ) -> Self {
        self.difficulties.insert(difficulty, label.into());
        self
    }
}

fn translated<'a, T: TaskLabel>(table: &'a BTreeMap<T, String>, key: T) -> &'a str {
    table.get(&key).map_or_else(|| key.as_str(), String::as_str)
}

impl LabelCatalog for TranslatedLabels {
    fn status_label(&self, status: TaskStatus) -> &str {
        translated(&self.statuses, status)
    }

    fn priority_label(&self, priority: TaskPriority) -> &str {
        translated(&self.priorities, priority)
    }

    fn difficulty_label(&self, difficulty: DifficultyLevel) -> &str {
        translated(&self.difficulties, difficulty)
    }
}
