//! Taskdeck: task view pipeline and real-time sync core for project boards.
//!
//! This crate turns the task records served by a remote project API into
//! the filtered, sorted, and categorised lists that board, list, table,
//! calendar, and Gantt views render, and keeps them current as real-time
//! events arrive.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and view types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the task API and preference
//!   storage
//! - **Adapters**: Concrete implementations of ports (in-memory, directory)
//!
//! # Modules
//!
//! - [`task`]: Task records, enumerations, and the task source port
//! - [`view`]: Filter, sort, impact/effort, and grouping pipeline
//! - [`sync`]: Real-time task events and the in-memory task collection
//! - [`preferences`]: Persisted filter, sort, and column preferences
//! - [`board`]: Orchestration service tying the other modules together

pub mod board;
pub mod preferences;
pub mod sync;
pub mod task;
pub mod view;
