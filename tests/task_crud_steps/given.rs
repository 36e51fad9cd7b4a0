//! Given steps for todo task BDD scenarios.

use super::world::TodoWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklet::task::{domain::NewTask, ports::TaskRepository};

#[given("an empty task list")]
fn empty_task_list(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.repository.list().is_empty(),
        "expected a fresh repository"
    );
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn existing_task(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let created = world
        .repository
        .create(NewTask::new(title))
        .wrap_err("create task for scenario setup")?;
    world.last_created_task = Some(created);
    Ok(())
}
