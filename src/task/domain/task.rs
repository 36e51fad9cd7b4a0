//! Task record and its in-place mutations.

use super::{TaskDomainError, TaskId, TaskPatch, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::fmt;

/// A single todo item.
///
/// Records are created and mutated only through a
/// [`TaskRepository`](crate::task::ports::TaskRepository), which assigns the
/// identifier and normalizes the text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task with the given identifier.
    pub(crate) fn new(
        id: TaskId,
        title: TaskTitle,
        description: Option<&str>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title,
            description: normalize_description(description),
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the status tag shown when rendering the task.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.completed { "DONE" } else { "PENDING" }
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a patch to the title and description.
    ///
    /// The title is validated before any field is touched, so a rejected
    /// patch leaves the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the patch carries a title
    /// that is empty after trimming.
    pub(crate) fn apply(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let (raw_title, description) = patch.into_parts();
        let validated_title = raw_title.map(TaskTitle::new).transpose()?;

        if let Some(new_title) = validated_title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = normalize_description(Some(new_description.as_str()));
        }
        self.touch(clock);
        Ok(())
    }

    /// Flips the completion flag.
    pub(crate) fn toggle_completion(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | [{}] | Title: {}",
            self.id,
            self.status_label(),
            self.title
        )?;
        if !self.description.is_empty() {
            write!(f, "\n   Description: {}", self.description)?;
        }
        Ok(())
    }
}

fn normalize_description(description: Option<&str>) -> String {
    description.map(str::trim).unwrap_or_default().to_owned()
}
