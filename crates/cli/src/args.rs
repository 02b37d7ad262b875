//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load settings (see `settings_context` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailbot")]
#[command(about = "Inspect and validate mailbot settings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mailbot show\n  mailbot show --sources\n  mailbot show --output env > .env.example\n  DRY_RUN=true mailbot check\n"
)]
pub struct Cli {
    /// Path to the local environment file
    #[arg(
        long,
        global = true,
        env = "MAILBOT_ENV_FILE",
        default_value = ".env",
        value_name = "FILE"
    )]
    pub env_file: PathBuf,

    /// Do not read the local environment file
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved settings
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Include the layer (default, .env, environment) that supplied each value
        #[arg(long)]
        sources: bool,
    },

    /// Validate the resolved settings and exit non-zero on problems
    Check,
}

/// Supported output formats for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    Table,
    /// Pretty-printed JSON
    Json,
    /// KEY=VALUE lines, loadable as a .env file
    Env,
}
