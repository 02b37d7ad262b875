//! `show` command: print the resolved settings.

use anyhow::Result;

use crate::args::OutputFormat;
use crate::formatters::format_settings;
use crate::settings_context::LoadedSettings;

pub fn run(loaded: &LoadedSettings, output: OutputFormat, with_sources: bool) -> Result<()> {
    let sources = with_sources.then(|| loaded.sources());
    let rendered = format_settings(loaded.settings(), sources, output)?;
    print!("{rendered}");
    Ok(())
}
