//! Runtime configuration for the scoreboard binary.
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded first by `main`), then to defaults.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "scoreboard> ";

/// Filter used when neither `--log-filter` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// How `summary` output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON array of summary lines
    Json,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "scoreboard")]
#[command(about = "Interactive live football scoreboard", long_about = None)]
pub struct AppConfig {
    /// Summary output format.
    #[arg(long, env = "SCOREBOARD_OUTPUT", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Prompt printed before each command.
    #[arg(long, env = "SCOREBOARD_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Log filter directive (e.g. "scoreboard=debug").
    #[arg(long = "log-filter", env = "SCOREBOARD_LOG", value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,

    /// Emit log lines as JSON.
    #[arg(long = "log-json")]
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            prompt: DEFAULT_PROMPT.to_string(),
            log_filter: None,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Builds the tracing filter.
    ///
    /// Precedence: `--log-filter`/`SCOREBOARD_LOG`, then `RUST_LOG`, then `warn`.
    /// An unparsable explicit filter falls back to the default.
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_filter {
            Some(directive) => {
                EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
            }
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }
}

/// Initialize logging.
///
/// Logs go to stderr; stdout belongs to the interactive session.
pub fn init_logging(config: &AppConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
