//! Binary entry point for the tasklet console.

use std::error::Error;
use std::io;

use clap::Parser;
use tasklet::{
    config::{Cli, init_logging},
    console::ConsoleSession,
    task::adapters::memory::InMemoryTaskRepository,
};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Cli::parse().into_config();
    init_logging(&config.log_filter)?;

    let mut repository = InMemoryTaskRepository::new();
    let end = {
        let mut session =
            ConsoleSession::new(&mut repository, io::stdin().lock(), io::stdout().lock())
                .with_format(config.output_format);
        session.run()?
    };

    info!(?end, tasks = repository.len(), "session finished");
    Ok(())
}
