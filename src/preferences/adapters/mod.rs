//! Adapter implementations for the preference store port.

mod directory;
mod memory;

pub use directory::DirectoryPreferenceStore;
pub use memory::InMemoryPreferenceStore;
