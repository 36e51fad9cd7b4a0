//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the console and
//! implemented by adapters.

pub mod repository;

#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::{TaskRepository, TaskRepositoryResult};
