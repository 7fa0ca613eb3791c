//! Filter evaluator.

use super::search::matches_search;
use crate::task::domain::Task;
use crate::view::domain::{FilterContext, FilterCriteria};

/// Returns the tasks that pass every active predicate, in input order.
///
/// When no criterion is active the input is returned unchanged.
#[must_use]
pub fn filter(tasks: &[Task], criteria: &FilterCriteria, context: &FilterContext<'_>) -> Vec<Task> {
    if !criteria.is_active() {
        return tasks.to_vec();
    }
    let needle = criteria.search_term().map(str::to_lowercase);
    tasks
        .iter()
        .filter(|task| passes(task, criteria, context, needle.as_deref()))
        .cloned()
        .collect()
}

/// Returns `true` when a single task passes every active predicate.
#[must_use]
pub fn matches(task: &Task, criteria: &FilterCriteria, context: &FilterContext<'_>) -> bool {
    let needle = criteria.search_term().map(str::to_lowercase);
    passes(task, criteria, context, needle.as_deref())
}

// Cheapest predicates first; `&&` short-circuits the rest.
fn passes(
    task: &Task,
    criteria: &FilterCriteria,
    context: &FilterContext<'_>,
    needle: Option<&str>,
) -> bool {
    criteria.status.includes(task.status())
        && criteria.priority.includes(task.priority())
        && criteria.difficulty.includes(task.difficulty())
        && color_matches(task, criteria)
        && (!criteria.mine_only || is_mine(task, context))
        && (!criteria.overdue_only || is_overdue(task, context))
        && milestone_matches(task, criteria)
        && team_matches(task, criteria)
        && tags_match(task, criteria)
        && needle.is_none_or(|term| matches_search(task, term, context.labels()))
        && dates_match(task, criteria)
}

fn color_matches(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria.selected_color().is_none_or(|color| {
        task.color()
            .to_lowercase()
            .contains(&color.to_lowercase())
    })
}

fn is_mine(task: &Task, context: &FilterContext<'_>) -> bool {
    context
        .current_user()
        .is_some_and(|user| task.is_assigned_to(user))
}

fn is_overdue(task: &Task, context: &FilterContext<'_>) -> bool {
    let open = !task.status().is_some_and(|status| status.is_closed());
    open && task.due_date().is_some_and(|due| due < context.now())
}

fn milestone_matches(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria
        .milestone
        .is_none_or(|wanted| task.milestone().is_some_and(|linked| linked.id == wanted))
}

fn team_matches(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria.team_members.is_empty()
        || task
            .persons_in_charge()
            .iter()
            .any(|person| criteria.team_members.contains(&person.id))
}

fn tags_match(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria.tags.is_empty() || task.tags().iter().any(|tag| criteria.tags.contains(&tag.id))
}

fn dates_match(task: &Task, criteria: &FilterCriteria) -> bool {
    criteria
        .dates
        .active_bounds()
        .all(|(field, range)| range.contains(task.date(field)))
}
