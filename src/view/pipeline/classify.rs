//! Impact/effort classifier.

use crate::task::domain::Task;
use crate::view::domain::{Quadrant, QuadrantBuckets};

/// Partitions tasks into the four impact/effort quadrants.
///
/// Tasks with an unset priority or difficulty are left out of every
/// quadrant.
#[must_use]
pub fn classify(tasks: &[Task]) -> QuadrantBuckets {
    let mut buckets = QuadrantBuckets::new();
    for task in tasks {
        if let Some(quadrant) = Quadrant::of(task.priority(), task.difficulty()) {
            buckets.push(quadrant, task.clone());
        }
    }
    buckets
}
