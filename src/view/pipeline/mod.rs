//! Pure pipeline functions run on every change to tasks or criteria.

mod classify;
mod filter;
mod group;
mod search;
mod sort;

pub use classify::classify;
pub use filter::{filter, matches};
pub use group::{group_by_milestone, group_by_status};
pub use sort::sort;
