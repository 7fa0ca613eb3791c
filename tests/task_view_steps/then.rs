//! Then steps for task board view scenarios.

use super::world::{TaskViewWorld, run_async};
use rstest_bdd_macros::then;
use taskdeck::task::domain::Task;

#[then(r#"the visible tasks are "{names}""#)]
fn visible_tasks_are(world: &TaskViewWorld, names: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    let visible = run_async(world.board.visible_tasks());
    let actual: Vec<&str> = visible.iter().map(Task::name).collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected visible tasks {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the board holds {count:u64} task")]
fn board_holds(world: &TaskViewWorld, count: u64) -> Result<(), eyre::Report> {
    let held = run_async(world.board.all_tasks()).len();
    if u64::try_from(held).ok() != Some(count) {
        return Err(eyre::eyre!("expected {count} tasks on the board, found {held}"));
    }
    Ok(())
}
