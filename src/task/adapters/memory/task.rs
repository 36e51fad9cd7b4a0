//! In-memory repository holding tasks for the lifetime of the process.

use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use tracing::debug;

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryResult},
};

/// In-memory task repository.
///
/// Identifiers are issued in increasing order, so iterating the map by key
/// yields tasks in creation order.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository<C = DefaultClock> {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
    clock: C,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryTaskRepository<C> {
    /// Creates an empty repository that timestamps tasks with `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: TaskId::FIRST,
            clock,
        }
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when no task is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

impl<C: Clock> TaskRepository for InMemoryTaskRepository<C> {
    fn create(&mut self, input: NewTask) -> TaskRepositoryResult<Task> {
        let title = TaskTitle::new(input.title())?;
        let id = self.allocate_id();
        let task = Task::new(id, title, input.description(), &self.clock);
        self.tasks.insert(id, task.clone());
        debug!(task_id = %id, "created task");
        Ok(task)
    }

    fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        let Some(task) = self.tasks.get_mut(&id) else {
            debug!(task_id = %id, "update skipped, task not found");
            return Ok(None);
        };
        task.apply(patch, &self.clock)?;
        debug!(task_id = %id, "updated task");
        Ok(Some(task.clone()))
    }

    fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.remove(&id);
        if removed.is_some() {
            debug!(task_id = %id, "deleted task");
        }
        removed
    }

    fn toggle_completion(&mut self, id: TaskId) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.toggle_completion(&self.clock);
        debug!(task_id = %id, completed = task.is_completed(), "toggled task");
        Some(task.clone())
    }

    fn peek_next_id(&self) -> TaskId {
        self.next_id
    }
}
