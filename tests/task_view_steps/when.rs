//! When steps for task board view scenarios.

use super::world::{TaskViewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdeck::{
    sync::TaskEvent,
    task::domain::{TaskLabel, TaskStatus},
    view::domain::{SortDirection, SortKey},
};

#[when(r#"the "{status}" status is excluded from the filter"#)]
fn status_excluded(world: &mut TaskViewWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::parse(&status).wrap_err("parse excluded status")?;
    let mut criteria = run_async(world.board.preferences()).criteria;
    criteria.status.set(Some(parsed), false);
    run_async(world.board.set_criteria(criteria));
    Ok(())
}

#[when(r#"the tasks are sorted by "{key}" descending"#)]
fn sorted_descending(world: &mut TaskViewWorld, key: String) -> Result<(), eyre::Report> {
    let parsed: SortKey = key.parse().wrap_err("parse sort key")?;
    let mut spec = run_async(world.board.select_sort(parsed));
    if spec.direction() != SortDirection::Descending {
        spec = run_async(world.board.select_sort(parsed));
    }
    if spec.direction() != SortDirection::Descending {
        return Err(eyre::eyre!("sort did not switch to descending: {spec:?}"));
    }
    Ok(())
}

#[when(r#"a delete event arrives for "{name}""#)]
fn delete_event_arrives(world: &mut TaskViewWorld, name: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&name)?;
    run_async(world.board.apply_event(TaskEvent::Deleted { task_id: task.id() }));
    Ok(())
}

#[when("the board is reopened")]
fn board_reopened(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    world.reopen();
    run_async(world.board.refresh()).wrap_err("refresh reopened board")?;
    Ok(())
}
