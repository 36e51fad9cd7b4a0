//! Menu entries offered by the interactive session.

use std::str::FromStr;
use thiserror::Error;

/// Menu text printed before every choice prompt.
pub const MENU: &str = "\
--- Todo Application Menu ---
1. Add new task
2. List all tasks
3. Update task
4. Delete task
5. Toggle complete/incomplete
6. Quit";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Create a task.
    Add,
    /// Print every task.
    List,
    /// Edit the title or description of a task.
    Update,
    /// Remove a task after confirmation.
    Delete,
    /// Flip the completion flag of a task.
    Toggle,
    /// Leave the session.
    Quit,
}

/// Error returned when menu input does not name an entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown menu choice '{0}'")]
pub struct ParseMenuChoiceError(pub String);

impl FromStr for MenuChoice {
    type Err = ParseMenuChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Update),
            "4" => Ok(Self::Delete),
            "5" => Ok(Self::Toggle),
            "6" => Ok(Self::Quit),
            _ => Err(ParseMenuChoiceError(value.to_owned())),
        }
    }
}
