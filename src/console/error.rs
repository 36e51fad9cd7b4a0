//! Errors raised by the console front end.

use std::io;
use thiserror::Error;

/// Failures of the terminal itself.
///
/// Rejected user input is reported on the console and never surfaces here.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Encoding the task list as JSON failed.
    #[error("failed to encode tasks as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
