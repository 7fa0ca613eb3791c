//! Given steps for task board view scenarios.

use super::world::{TaskViewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::task::{
    domain::{Task, TaskLabel, TaskPriority, TaskStatus},
    ports::TaskSource,
};

fn store_task(world: &TaskViewWorld, task: &Task) -> Result<(), eyre::Report> {
    run_async(world.source.create_task(task)).wrap_err("store scenario task")?;
    Ok(())
}

#[given(r#"a task "{name}" with status "{status}""#)]
fn task_with_status(
    world: &mut TaskViewWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::parse(&status).wrap_err("parse scenario status")?;
    store_task(world, &Task::new(world.project, name).with_status(parsed))
}

#[given(r#"a task "{name}" with priority "{priority}""#)]
fn task_with_priority(
    world: &mut TaskViewWorld,
    name: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::parse(&priority).wrap_err("parse scenario priority")?;
    store_task(world, &Task::new(world.project, name).with_priority(parsed))
}

#[given("the board has been refreshed")]
fn board_refreshed(world: &mut TaskViewWorld) -> Result<(), eyre::Report> {
    run_async(world.board.refresh()).wrap_err("refresh scenario board")?;
    Ok(())
}
