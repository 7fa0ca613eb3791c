//! Task board orchestration.
//!
//! [`services::TaskBoardService`] owns the state of one open project view:
//! it fetches tasks and milestones from the task source, applies real-time
//! events, persists preference changes, and runs the view pipeline to
//! produce what the board, list, table, calendar, and Gantt views render.

pub mod services;

#[cfg(test)]
mod tests;
