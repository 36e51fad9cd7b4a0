//! Command-line configuration and logging setup.
//!
//! Every option can also be supplied through an environment variable so the
//! binary behaves the same when launched from scripts.

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::console::OutputFormat;

/// Tracing filter used when neither `--log-level` nor `TASKLET_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments for the `tasklet` binary.
#[derive(Debug, Parser)]
#[command(name = "tasklet")]
#[command(version)]
#[command(about = "Interactive in-memory todo list")]
pub struct Cli {
    /// Format used when listing tasks
    #[arg(long, value_enum, env = "TASKLET_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Tracing filter directive, e.g. `debug` or `tasklet=trace`
    #[arg(long = "log-level", env = "TASKLET_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl Cli {
    /// Converts parsed arguments into runtime configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            output_format: self.format,
            log_filter: self.log_level,
        }
    }
}

/// Runtime configuration for one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Format used when listing tasks.
    pub output_format: OutputFormat,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

/// Errors raised while installing the logging subscriber.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidLogFilter {
        /// Directive as supplied by the user.
        directive: String,
        /// Parser failure.
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Installs a stderr `tracing` subscriber filtered by `directive`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLogFilter`] when the directive does not
/// parse and [`ConfigError::Subscriber`] when a global subscriber is
/// already set.
pub fn init_logging(directive: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(directive).map_err(|source| ConfigError::InvalidLogFilter {
        directive: directive.to_owned(),
        source,
    })?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
