//! Application services for task board orchestration.

mod board;

pub use board::{TaskBoardConfig, TaskBoardError, TaskBoardResult, TaskBoardService};
