//! In-memory adapters for task ports.

mod source;

pub use source::InMemoryTaskSource;
