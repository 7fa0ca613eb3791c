//! Real-time task synchronisation.
//!
//! The companion server pushes task events over a socket channel; this module
//! decodes them and applies them, in arrival order, to the in-memory task
//! collection a view renders from. The socket transport itself is an
//! external collaborator.

mod collection;
mod event;

pub use collection::TaskCollection;
pub use event::{EventOutcome, TaskEvent};

#[cfg(test)]
mod tests;
