//! Unit tests for preference persistence.

mod service_tests;
