//! mailbot - inspect and validate mailbot settings.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load settings once (defaults, `.env`, environment) and pass them down.
//! - Initialize logging from the loaded settings.
//!
//! Invariants:
//! - Settings are loaded BEFORE logging so `LOG_LEVEL`/`LOG_FORMAT` apply to every log line.
//! - Load failures exit with a structured code before any command runs.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod logging;
mod settings_context;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use settings_context::LoadedSettings;

fn main() {
    let cli = Cli::parse();

    let loaded = match LoadedSettings::load(&cli.env_file, !cli.no_dotenv) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    logging::init(loaded.settings());

    let settings = loaded.settings();
    tracing::debug!(
        ollama_host = settings.ollama_host(),
        storage_dir = settings.storage_dir(),
        dry_run = settings.dry_run(),
        "Settings loaded"
    );

    let exit_code = match run_command(cli.command, &loaded) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
