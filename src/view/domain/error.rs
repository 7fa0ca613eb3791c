//! Error types for view boundary parsing.

use thiserror::Error;

/// Error returned when a sort key string names no sortable field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);
