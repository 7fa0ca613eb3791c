//! Task records and the task source boundary.
//!
//! Tasks are created, updated, and deleted through the remote project API and
//! mirrored locally for rendering. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
