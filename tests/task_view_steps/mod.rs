//! Step definitions for task board view scenarios.

pub mod world;

mod given;
mod then;
mod when;
