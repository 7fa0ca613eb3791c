//! Unit tests for task board orchestration.
