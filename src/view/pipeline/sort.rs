//! Sort comparator.

use crate::task::domain::{DateField, Task};
use crate::view::domain::{SortDirection, SortKey, SortSpec};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Returns a stably sorted copy of `tasks`.
///
/// Tasks missing the sorted date sort after every dated task in both
/// directions.
#[must_use]
pub fn sort(tasks: &[Task], spec: SortSpec) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|left, right| compare(left, right, spec));
    sorted
}

enum SortValue<'a> {
    Text(&'a str),
    Date(Option<DateTime<Utc>>),
    Rank(u8),
}

fn sort_value(task: &Task, key: SortKey) -> SortValue<'_> {
    match key {
        SortKey::Name => SortValue::Text(task.name()),
        SortKey::Milestone => SortValue::Text(task.milestone_title()),
        SortKey::Category => SortValue::Text(task.category()),
        SortKey::Priority => SortValue::Rank(task.priority().map_or(0, |priority| priority.rank())),
        SortKey::DifficultyLevel => {
            SortValue::Rank(task.difficulty().map_or(0, |difficulty| difficulty.rank()))
        }
        SortKey::EstimatedStartDate => SortValue::Date(task.date(DateField::EstimatedStart)),
        SortKey::EstimatedEndDate => SortValue::Date(task.date(DateField::EstimatedEnd)),
        SortKey::ActualStartDate => SortValue::Date(task.date(DateField::ActualStart)),
        SortKey::ActualEndDate => SortValue::Date(task.date(DateField::ActualEnd)),
        SortKey::CreatedAt => SortValue::Date(task.created().map(|stamp| stamp.at)),
        SortKey::UpdatedAt => SortValue::Date(task.updated().map(|stamp| stamp.at)),
    }
}

fn compare(left: &Task, right: &Task, spec: SortSpec) -> Ordering {
    let direction = spec.direction();
    match (sort_value(left, spec.key()), sort_value(right, spec.key())) {
        (SortValue::Text(a), SortValue::Text(b)) => direction.apply(collate(a, b)),
        (SortValue::Rank(a), SortValue::Rank(b)) => direction.apply(a.cmp(&b)),
        (SortValue::Date(a), SortValue::Date(b)) => compare_dates(a, b, direction),
        _ => Ordering::Equal,
    }
}

/// Case-insensitive ordering with the raw text as tie-breaker.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_dates(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
