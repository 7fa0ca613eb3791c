//! Unit tests for real-time task synchronisation.
