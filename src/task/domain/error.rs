//! Error types for task domain parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// An enumerated field carried a label outside its fixed set.
    #[error("unknown {field} value: '{value}'")]
    UnknownLabel {
        /// Name of the enumerated field.
        field: &'static str,
        /// The rejected raw value.
        value: String,
    },

    /// The milestone state value is unsupported.
    #[error("unknown milestone state: {0}")]
    UnknownMilestoneState(String),
}
