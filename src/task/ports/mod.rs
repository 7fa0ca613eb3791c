//! Port contracts for the remote task API.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};
