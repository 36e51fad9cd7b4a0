//! Interactive menu loop over a task repository.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use tracing::{debug, warn};

use super::{ConsoleResult, MENU, MenuChoice};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::TaskRepository,
};

/// How task listings are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One rendered task per entry.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the quit entry.
    Quit,
    /// Input ended before the user quit.
    Interrupted,
}

/// Outcome of one menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
    EndOfInput,
}

/// Outcome of asking the user for an existing task.
enum Lookup {
    Found(Task),
    Skipped,
    EndOfInput,
}

/// Console session driving a borrowed repository.
///
/// Input and output are generic so sessions can run against in-memory
/// buffers as well as the process terminal.
pub struct ConsoleSession<'r, R, I, O> {
    repository: &'r mut R,
    input: I,
    output: O,
    format: OutputFormat,
}

impl<'r, R, I, O> ConsoleSession<'r, R, I, O>
where
    R: TaskRepository,
    I: BufRead,
    O: Write,
{
    /// Creates a session printing listings as text.
    #[must_use]
    pub const fn new(repository: &'r mut R, input: I, output: O) -> Self {
        Self {
            repository,
            input,
            output,
            format: OutputFormat::Text,
        }
    }

    /// Sets the listing format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Consumes the session and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs the menu loop until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`](super::ConsoleError) when the terminal
    /// cannot be read or written.
    pub fn run(&mut self) -> ConsoleResult<SessionEnd> {
        writeln!(self.output, "Welcome to the Console-Based Todo Application!")?;
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("\nEnter your choice (1-6): ")? else {
                return self.interrupted();
            };
            let step = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    warn!(%err, "rejected menu input");
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 6."
                    )?;
                    Step::Continue
                }
            };
            match step {
                Step::Continue => {}
                Step::Quit => return Ok(SessionEnd::Quit),
                Step::EndOfInput => return self.interrupted(),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ConsoleResult<Step> {
        debug!(?choice, "menu choice selected");
        match choice {
            MenuChoice::Add => self.add_task(),
            MenuChoice::List => self.list_tasks().map(|()| Step::Continue),
            MenuChoice::Update => self.update_task(),
            MenuChoice::Delete => self.delete_task(),
            MenuChoice::Toggle => self.toggle_task(),
            MenuChoice::Quit => {
                writeln!(
                    self.output,
                    "Thank you for using the Todo Application. Goodbye!"
                )?;
                Ok(Step::Quit)
            }
        }
    }

    fn add_task(&mut self) -> ConsoleResult<Step> {
        writeln!(self.output, "\n--- Add New Task ---")?;
        let Some(title) = self.prompt("Enter task title (required): ")? else {
            return Ok(Step::EndOfInput);
        };
        if title.is_empty() {
            writeln!(self.output, "Error: Task title cannot be empty.")?;
            return Ok(Step::Continue);
        }
        let Some(description) =
            self.prompt("Enter task description (optional, press Enter to skip): ")?
        else {
            return Ok(Step::EndOfInput);
        };

        let mut input = NewTask::new(title);
        if !description.is_empty() {
            input = input.with_description(description);
        }
        match self.repository.create(input) {
            Ok(task) => writeln!(self.output, "Task added successfully!\n{task}")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Step::Continue)
    }

    fn list_tasks(&mut self) -> ConsoleResult<()> {
        writeln!(self.output, "\n--- All Tasks ---")?;
        let tasks = self.repository.list();
        match self.format {
            OutputFormat::Text if tasks.is_empty() => {
                writeln!(self.output, "No tasks yet. Add a task to get started!")?;
            }
            OutputFormat::Text => {
                for task in &tasks {
                    writeln!(self.output, "{task}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.output, &tasks)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    fn update_task(&mut self) -> ConsoleResult<Step> {
        writeln!(self.output, "\n--- Update Task ---")?;
        let task = match self.read_existing_task("update")? {
            Lookup::Found(task) => task,
            Lookup::Skipped => return Ok(Step::Continue),
            Lookup::EndOfInput => return Ok(Step::EndOfInput),
        };
        writeln!(self.output, "Current task: {task}")?;

        let title_prompt = format!(
            "Enter new title (current: '{}', press Enter to keep current): ",
            task.title()
        );
        let Some(new_title) = self.prompt(&title_prompt)? else {
            return Ok(Step::EndOfInput);
        };
        let description_prompt = format!(
            "Enter new description (current: '{}', press Enter to keep current): ",
            task.description()
        );
        let Some(new_description) = self.prompt(&description_prompt)? else {
            return Ok(Step::EndOfInput);
        };

        let mut patch = TaskPatch::new();
        if !new_title.is_empty() {
            patch = patch.with_title(new_title);
        }
        if !new_description.is_empty() {
            patch = patch.with_description(new_description);
        }
        match self.repository.update(task.id(), patch) {
            Ok(Some(updated)) => {
                writeln!(self.output, "Task updated successfully!\n{updated}")?;
            }
            Ok(None) => writeln!(self.output, "Failed to update task.")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Step::Continue)
    }

    fn delete_task(&mut self) -> ConsoleResult<Step> {
        writeln!(self.output, "\n--- Delete Task ---")?;
        let task = match self.read_existing_task("delete")? {
            Lookup::Found(task) => task,
            Lookup::Skipped => return Ok(Step::Continue),
            Lookup::EndOfInput => return Ok(Step::EndOfInput),
        };
        writeln!(self.output, "You are about to delete this task:\n{task}")?;

        let Some(answer) = self.prompt("Are you sure you want to delete this task? (y/N): ")?
        else {
            return Ok(Step::EndOfInput);
        };
        if !is_confirmation(&answer) {
            writeln!(self.output, "Task deletion cancelled.")?;
            return Ok(Step::Continue);
        }
        if self.repository.delete(task.id()).is_some() {
            writeln!(self.output, "Task deleted successfully!")?;
        } else {
            writeln!(self.output, "Failed to delete task.")?;
        }
        Ok(Step::Continue)
    }

    fn toggle_task(&mut self) -> ConsoleResult<Step> {
        writeln!(self.output, "\n--- Toggle Task Status ---")?;
        let task = match self.read_existing_task("toggle")? {
            Lookup::Found(task) => task,
            Lookup::Skipped => return Ok(Step::Continue),
            Lookup::EndOfInput => return Ok(Step::EndOfInput),
        };
        writeln!(self.output, "Current task: {task}")?;

        match self.repository.toggle_completion(task.id()) {
            Some(updated) => writeln!(self.output, "Task status updated!\n{updated}")?,
            None => writeln!(self.output, "Failed to update task status.")?,
        }
        Ok(Step::Continue)
    }

    /// Prompts for a task identifier and looks the task up, reporting any
    /// problem to the user.
    fn read_existing_task(&mut self, verb: &str) -> ConsoleResult<Lookup> {
        let Some(raw_id) = self.prompt(&format!("Enter task ID to {verb}: "))? else {
            return Ok(Lookup::EndOfInput);
        };
        if raw_id.is_empty() {
            writeln!(self.output, "Error: Task ID cannot be empty.")?;
            return Ok(Lookup::Skipped);
        }
        let id = match raw_id.parse::<TaskId>() {
            Ok(id) => id,
            Err(err) => {
                warn!(%err, "rejected task identifier");
                writeln!(
                    self.output,
                    "Error: Please enter a valid task ID (a number)."
                )?;
                return Ok(Lookup::Skipped);
            }
        };
        match self.repository.get(id) {
            Some(task) => Ok(Lookup::Found(task)),
            None => {
                writeln!(self.output, "Error: Task with ID {id} not found.")?;
                Ok(Lookup::Skipped)
            }
        }
    }

    /// Writes `message`, then reads one trimmed line.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn interrupted(&mut self) -> ConsoleResult<SessionEnd> {
        writeln!(self.output, "\n\nApplication interrupted. Goodbye!")?;
        Ok(SessionEnd::Interrupted)
    }
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}
