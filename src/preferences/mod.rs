//! Persisted view preferences.
//!
//! Filter criteria, the sort spec, the selected view mode, and per-view-mode
//! column visibility survive reloads through a key-value preference store.
//! Loading never fails: malformed or missing entries fall back to defaults.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Load/save orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
