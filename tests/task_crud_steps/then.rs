//! Then steps for todo task BDD scenarios.

use super::world::{TodoWorld, task_id};
use rstest_bdd_macros::then;
use tasklet::task::{
    domain::{Task, TaskDomainError},
    ports::TaskRepository,
};

fn stored_task(world: &TodoWorld, id: u64) -> Result<Task, eyre::Report> {
    world
        .repository
        .get(task_id(id)?)
        .ok_or_else(|| eyre::eyre!("expected task {id} to be stored"))
}

#[then(r#"task {id:u64} is titled "{title}" and pending"#)]
fn task_titled_and_pending(world: &TodoWorld, id: u64, title: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, id)?;
    eyre::ensure!(
        task.title().as_str() == title,
        "expected title {title:?}, found {:?}",
        task.title().as_str()
    );
    eyre::ensure!(!task.is_completed(), "expected task {id} to be pending");
    Ok(())
}

#[then(r#"task {id:u64} is described as "{description}""#)]
fn task_described_as(world: &TodoWorld, id: u64, description: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, id)?;
    eyre::ensure!(
        task.description() == description,
        "expected description {description:?}, found {:?}",
        task.description()
    );
    Ok(())
}

#[then("task {id:u64} is completed")]
fn task_completed(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let task = stored_task(world, id)?;
    eyre::ensure!(task.is_completed(), "expected task {id} to be completed");
    Ok(())
}

#[then("the list holds only task {id:u64}")]
fn list_holds_only(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let ids: Vec<u64> = world
        .repository
        .list()
        .iter()
        .map(|task| task.id().value())
        .collect();
    eyre::ensure!(ids == vec![id], "expected only task {id}, found {ids:?}");
    Ok(())
}

#[then("the last operation fails with a validation error")]
fn last_operation_failed(world: &TodoWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_error == Some(TaskDomainError::EmptyTitle),
        "expected an empty title error, found {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the next identifier is {id:u64}")]
fn next_identifier_is(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let next = world.repository.peek_next_id();
    eyre::ensure!(next == task_id(id)?, "expected next id {id}, found {next}");
    Ok(())
}

#[then("the last created task has identifier {id:u64}")]
fn last_created_has_identifier(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task has been created in this scenario"))?;
    eyre::ensure!(
        task.id() == task_id(id)?,
        "expected last created id {id}, found {}",
        task.id()
    );
    Ok(())
}
