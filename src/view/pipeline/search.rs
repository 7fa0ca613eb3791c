//! Free-text search over the fields a user can see.

use crate::task::domain::{DateField, Task};
use crate::view::domain::LabelCatalog;

/// Format used when matching search terms against schedule dates.
const SEARCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `true` when any searchable field contains `needle`.
///
/// `needle` must already be lowercase.
pub(super) fn matches_search(task: &Task, needle: &str, labels: &dyn LabelCatalog) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(task.name())
        || contains(task.milestone_title())
        || contains(task.category())
        || contains(task.description())
        || task
            .status()
            .is_some_and(|status| contains(labels.status_label(status)))
        || task
            .priority()
            .is_some_and(|priority| contains(labels.priority_label(priority)))
        || task
            .difficulty()
            .is_some_and(|difficulty| contains(labels.difficulty_label(difficulty)))
        || task
            .persons_in_charge()
            .iter()
            .any(|person| contains(&person.name) || contains(&person.email))
        || DateField::ALL.into_iter().any(|field| {
            task.date(field)
                .is_some_and(|date| date.format(SEARCH_DATE_FORMAT).to_string().contains(needle))
        })
}
