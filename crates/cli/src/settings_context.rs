//! Settings context for command execution.
//!
//! Responsibilities:
//! - Load settings once at startup from the CLI-selected `.env` file and the environment.
//! - Remember which layer supplied each value for display.
//!
//! Does NOT handle:
//! - Parsing or coercion (delegated to `mailbot_config`).

use std::path::Path;

use mailbot_config::{ConfigError, Field, Settings, SettingsLoader, Source};

/// Settings plus the layer that supplied each field.
pub(crate) struct LoadedSettings {
    settings: Settings,
    sources: Vec<(Field, Source)>,
}

impl LoadedSettings {
    /// Load settings: defaults, then `env_file` (unless disabled), then the environment.
    pub(crate) fn load(env_file: &Path, use_dotenv: bool) -> Result<Self, ConfigError> {
        let mut loader = SettingsLoader::new().with_dotenv_path(env_file.to_path_buf());
        if use_dotenv {
            loader = loader.load_dotenv()?;
        }
        let loader = loader.from_env()?;

        let sources = Field::ALL
            .into_iter()
            .map(|field| (field, loader.source_of(field)))
            .collect();

        Ok(Self {
            settings: loader.build()?,
            sources,
        })
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn sources(&self) -> &[(Field, Source)] {
        &self.sources
    }
}
