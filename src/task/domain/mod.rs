//! Domain model for todo tasks.
//!
//! The domain owns title validation and the rules for changing a task in
//! place. Identifier assignment and storage live behind the repository port.

mod error;
mod ids;
mod input;
mod task;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use input::{NewTask, TaskPatch};
pub use task::Task;
