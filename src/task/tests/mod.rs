//! Unit tests for the task domain and in-memory source.
