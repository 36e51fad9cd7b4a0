//! Shared world state for todo task BDD scenarios.

use rstest::fixture;
use tasklet::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError, TaskId},
};

/// Scenario world for todo task behaviour tests.
pub struct TodoWorld {
    pub repository: InMemoryTaskRepository,
    pub last_created_task: Option<Task>,
    pub last_error: Option<TaskDomainError>,
}

impl TodoWorld {
    /// Creates a world around an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: InMemoryTaskRepository::new(),
            last_created_task: None,
            last_error: None,
        }
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Converts a step placeholder into a task identifier.
pub fn task_id(value: u64) -> Result<TaskId, eyre::Report> {
    TaskId::new(value).ok_or_else(|| eyre::eyre!("task identifiers start at 1, got {value}"))
}
