//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("title required")]
    EmptyTitle,
}

/// Error returned while parsing a task identifier from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier '{0}', expected a positive integer")]
pub struct ParseTaskIdError(pub String);
