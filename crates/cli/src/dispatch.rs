//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI subcommands to their handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings loading (see `main()` and `settings_context`).

use anyhow::Result;

use crate::args::Commands;
use crate::commands;
use crate::settings_context::LoadedSettings;

/// Dispatch a subcommand with the settings loaded at startup.
pub(crate) fn run_command(command: Commands, loaded: &LoadedSettings) -> Result<()> {
    match command {
        Commands::Show { output, sources } => commands::show::run(loaded, output, sources),
        Commands::Check => commands::check::run(loaded.settings()),
    }
}
