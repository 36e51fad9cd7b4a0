//! When steps for todo task BDD scenarios.

use super::world::{TodoWorld, task_id};
use rstest_bdd_macros::when;
use tasklet::task::{
    domain::{NewTask, TaskPatch},
    ports::TaskRepository,
};

fn record_create(world: &mut TodoWorld, input: NewTask) {
    match world.repository.create(input) {
        Ok(task) => {
            world.last_created_task = Some(task);
            world.last_error = None;
        }
        Err(err) => world.last_error = Some(err),
    }
}

#[when(r#"I add a task titled "{title}" without a description"#)]
fn add_task(world: &mut TodoWorld, title: String) {
    record_create(world, NewTask::new(title));
}

#[when(r#"I add a task titled "{title}" with description "{description}""#)]
fn add_described_task(world: &mut TodoWorld, title: String, description: String) {
    record_create(world, NewTask::new(title).with_description(description));
}

#[when("I toggle task {id:u64}")]
fn toggle_task(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .repository
        .toggle_completion(task_id(id)?)
        .ok_or_else(|| eyre::eyre!("task {id} should exist before toggling"))?;
    Ok(())
}

#[when("I delete task {id:u64}")]
fn delete_task(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .repository
        .delete(task_id(id)?)
        .ok_or_else(|| eyre::eyre!("task {id} should exist before deletion"))?;
    Ok(())
}

#[when(r#"I rename task {id:u64} to "{title}" and describe it as "{description}""#)]
fn rename_task(
    world: &mut TodoWorld,
    id: u64,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let patch = TaskPatch::new()
        .with_title(title)
        .with_description(description);
    match world.repository.update(task_id(id)?, patch) {
        Ok(Some(_)) => world.last_error = None,
        Ok(None) => return Err(eyre::eyre!("task {id} should exist before update")),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}
