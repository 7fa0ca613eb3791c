//! Unit tests for the view pipeline.
