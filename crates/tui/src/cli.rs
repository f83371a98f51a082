use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::LoggerVersion;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "runsim",
    version,
    about = "Terminal shell composing navigation, main content and a swappable log overlay.",
    after_help = "Examples:\n  runsim              Launch the TUI (same as `runsim tui`)\n  runsim --logger v1  Launch with the retired logger bound\n  runsim render --json"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Logger implementation bound into the logging slot (defaults to v2, or RUNSIM_LOGGER)
    #[arg(long, value_enum, global = true)]
    pub logger: Option<LoggerVersion>,

    /// Tracing filter directive (e.g. "info", "debug", "runsim_core=trace")
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the terminal UI (default command)
    Tui,
    /// Compose the view once and print it
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Emit the composed tree as JSON
    #[arg(long)]
    pub json: bool,
}
