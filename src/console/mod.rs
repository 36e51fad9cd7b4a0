//! Console front end for the todo application.
//!
//! A [`ConsoleSession`] loops over a numbered menu, reads user input, calls
//! the [`TaskRepository`](crate::task::ports::TaskRepository) one operation
//! at a time and renders the outcome.

mod error;
mod menu;
mod session;

pub use error::{ConsoleError, ConsoleResult};
pub use menu::{MENU, MenuChoice, ParseMenuChoiceError};
pub use session::{ConsoleSession, OutputFormat, SessionEnd};
