//! Repository port for task storage and in-place mutation.

use crate::task::domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch};

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskDomainError>;

/// Task storage contract.
///
/// Implementations own every task they hold and assign identifiers
/// themselves. A missing identifier is reported as `None`, never as an
/// error; the only error is an empty title.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository {
    /// Creates and stores a new task, returning the stored record.
    ///
    /// The title and description are trimmed and the task receives the
    /// next identifier. Nothing is stored and no identifier is consumed when
    /// validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    fn create(&mut self, input: NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn get(&self, id: TaskId) -> Option<Task>;

    /// Returns all tasks in creation order.
    fn list(&self) -> Vec<Task>;

    /// Applies a patch to an existing task and returns the updated record.
    ///
    /// Returns `Ok(None)` when the task does not exist. The identifier and
    /// completion flag are never changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch carries a title
    /// that is empty after trimming. The stored task is left untouched,
    /// including any description change in the same patch.
    fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task and returns it.
    ///
    /// Returns `None` when the task does not exist. Removed identifiers are
    /// never assigned again.
    fn delete(&mut self, id: TaskId) -> Option<Task>;

    /// Flips the completion flag of a task and returns the updated record.
    ///
    /// Returns `None` when the task does not exist.
    fn toggle_completion(&mut self, id: TaskId) -> Option<Task>;

    /// Returns the identifier the next successful [`create`](Self::create)
    /// will assign.
    fn peek_next_id(&self) -> TaskId;
}
