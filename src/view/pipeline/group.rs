//! Milestone and status grouping.

use crate::task::domain::{Milestone, MilestoneId, Task, TaskLabel, TaskStatus};
use crate::view::domain::{MilestoneGroup, MilestoneGroups, StatusColumn, StatusColumns};
use std::collections::HashMap;

/// Groups tasks under the active milestones they reference.
///
/// Every active milestone gets a group, even when empty. Tasks linked to an
/// archived or unknown milestone land in `ungrouped`. When a milestone ID is
/// supplied twice, the first occurrence wins.
#[must_use]
pub fn group_by_milestone(tasks: &[Task], milestones: &[Milestone]) -> MilestoneGroups {
    let mut groups: Vec<MilestoneGroup> = Vec::new();
    let mut slots: HashMap<MilestoneId, usize> = HashMap::new();
    for milestone in milestones.iter().filter(|milestone| milestone.is_active()) {
        if slots.contains_key(&milestone.id) {
            continue;
        }
        slots.insert(milestone.id, groups.len());
        groups.push(MilestoneGroup {
            milestone: milestone.clone(),
            tasks: Vec::new(),
        });
    }

    let mut ungrouped = Vec::new();
    for task in tasks {
        let group = task
            .milestone()
            .and_then(|linked| slots.get(&linked.id))
            .and_then(|slot| groups.get_mut(*slot));
        match group {
            Some(group) => group.tasks.push(task.clone()),
            None => ungrouped.push(task.clone()),
        }
    }

    MilestoneGroups { groups, ungrouped }
}

/// Lays tasks out in board columns, one per status plus an unset column.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> StatusColumns {
    let buckets = TaskStatus::ALL
        .iter()
        .copied()
        .map(Some)
        .chain(std::iter::once(None));
    let columns = buckets
        .map(|status| StatusColumn {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.status() == status)
                .cloned()
                .collect(),
        })
        .collect();
    StatusColumns { columns }
}
