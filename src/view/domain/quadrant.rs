//! Impact/effort quadrants.

use crate::task::domain::{DifficultyLevel, Task, TaskPriority};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the four impact/effort buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Quick wins.
    HighImpactLowEffort,
    /// Fill-ins.
    LowImpactLowEffort,
    /// Thankless tasks.
    LowImpactHighEffort,
    /// Major projects.
    HighImpactHighEffort,
}

impl Quadrant {
    /// All quadrants in display order.
    pub const ALL: [Self; 4] = [
        Self::HighImpactLowEffort,
        Self::LowImpactLowEffort,
        Self::LowImpactHighEffort,
        Self::HighImpactHighEffort,
    ];

    /// Returns the quadrant for a priority and difficulty pair.
    ///
    /// Returns `None` when either value is unset; such tasks belong to no
    /// quadrant.
    #[must_use]
    pub const fn of(
        priority: Option<TaskPriority>,
        difficulty: Option<DifficultyLevel>,
    ) -> Option<Self> {
        let (Some(priority), Some(difficulty)) = (priority, difficulty) else {
            return None;
        };
        Some(match (priority.is_high_impact(), difficulty.is_high_effort()) {
            (true, false) => Self::HighImpactLowEffort,
            (false, false) => Self::LowImpactLowEffort,
            (false, true) => Self::LowImpactHighEffort,
            (true, true) => Self::HighImpactHighEffort,
        })
    }

    /// Returns the quadrant name in storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighImpactLowEffort => "high_impact_low_effort",
            Self::LowImpactLowEffort => "low_impact_low_effort",
            Self::LowImpactHighEffort => "low_impact_high_effort",
            Self::HighImpactHighEffort => "high_impact_high_effort",
        }
    }
}

/// Tasks partitioned into the four quadrants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantBuckets {
    buckets: BTreeMap<Quadrant, Vec<Task>>,
}

impl QuadrantBuckets {
    /// Creates four empty buckets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: Quadrant::ALL
                .into_iter()
                .map(|quadrant| (quadrant, Vec::new()))
                .collect(),
        }
    }

    /// Appends a task to a quadrant.
    pub fn push(&mut self, quadrant: Quadrant, task: Task) {
        self.buckets.entry(quadrant).or_default().push(task);
    }

    /// Returns the tasks in one quadrant in input order.
    #[must_use]
    pub fn get(&self, quadrant: Quadrant) -> &[Task] {
        self.buckets
            .get(&quadrant)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over every quadrant and its tasks.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &[Task])> + '_ {
        self.buckets
            .iter()
            .map(|(quadrant, tasks)| (*quadrant, tasks.as_slice()))
    }

    /// Returns how many tasks were classified.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns `true` when no task was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QuadrantBuckets {
    fn default() -> Self {
        Self::new()
    }
}
