//! Tasklet: an interactive, in-memory todo list.
//!
//! The crate keeps tasks in process memory for one run and drives them from
//! a numbered console menu.
//!
//! # Architecture
//!
//! Tasklet follows hexagonal architecture principles:
//!
//! - **Domain**: task records, identifiers and validation
//! - **Ports**: the [`TaskRepository`](task::ports::TaskRepository) contract
//! - **Adapters**: the in-memory repository
//!
//! # Modules
//!
//! - [`task`]: task domain, repository port and in-memory adapter
//! - [`console`]: interactive menu loop over a repository
//! - [`config`]: command-line configuration and logging setup

pub mod config;
pub mod console;
pub mod task;
