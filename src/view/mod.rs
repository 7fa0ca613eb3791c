//! Task view pipeline.
//!
//! Turns the current task collection into what a view renders: the filter
//! evaluator, the sort comparator, the impact/effort classifier, and the
//! milestone and status groupings. Every pipeline function is pure and
//! synchronous; persistence of criteria lives in [`crate::preferences`].
//!
//! - Criteria, sort specs, and result shapes in [`domain`]
//! - Pipeline functions in [`pipeline`]

pub mod domain;
pub mod pipeline;

#[cfg(test)]
mod tests;
