//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` for layered settings merging.
//! - Read the optional `.env` file without touching the process environment.
//! - Build the final `Settings` from the winning raw values and defaults.
//!
//! Does NOT handle:
//! - Selecting environment entries (delegated to env.rs).
//! - Coercing raw strings (delegated to parse.rs).
//!
//! Invariants / Assumptions:
//! - Layers are applied lowest precedence first; a later layer overwrites.
//! - Layers store raw strings only. Coercion happens once, in `build()`, on
//!   the value that won, so a bad lower-layer value that is overridden never
//!   surfaces.
//! - Environment variables take precedence over `.env` values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the file is opened.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::fields::{Field, Source};
use super::parse::{parse_bool, parse_count, parse_threshold};
use crate::constants::{DOTENV_DISABLED_VAR, DOTENV_FILE_NAME};
use crate::types::Settings;

/// Settings loader that merges defaults, a `.env` file and the environment.
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    dotenv_path: Option<PathBuf>,
    /// Winning raw value per field (indexed by `Field as usize`) and its layer.
    values: [Option<(String, Source)>; Field::ALL.len()],
}

impl SettingsLoader {
    /// Create a new settings loader with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Override the `.env` file location (defaults to `.env` in the working directory).
    pub fn with_dotenv_path(mut self, path: PathBuf) -> Self {
        self.dotenv_path = Some(path);
        self
    }

    /// Path the `.env` layer is read from.
    pub fn dotenv_path(&self) -> &Path {
        self.dotenv_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DOTENV_FILE_NAME))
    }

    /// Apply values from the `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not read.
    /// The process environment is never modified.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored. Values are not coerced
    /// here; see [`SettingsLoader::build`].
    pub fn load_dotenv(mut self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        let iter = match dotenvy::from_path_iter(self.dotenv_path()) {
            Ok(iter) => iter,
            Err(e) if Self::is_not_found(&e) => return Ok(self),
            Err(e) => return Err(Self::map_dotenv_error(e)),
        };

        for item in iter {
            let (key, value) = item.map_err(Self::map_dotenv_error)?;
            if let Some(field) = Field::lookup(&key) {
                self.set_raw(field, value, Source::DotenvFile);
            }
        }

        Ok(self)
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// SAFETY: the line content carried by `LineParse` is dropped here.
    fn map_dotenv_error(err: dotenvy::Error) -> ConfigError {
        match err {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }

    /// Apply values from the process environment.
    ///
    /// Environment variables take precedence over `.env` values.
    pub fn from_env(self) -> Result<Self, ConfigError> {
        self.from_vars(std::env::vars_os())
    }

    /// Apply an explicit environment snapshot, with the same precedence and
    /// matching rules as [`SettingsLoader::from_env`].
    pub fn from_vars<I, K, V>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        apply_env(&mut self, vars)?;
        Ok(self)
    }

    /// Which layer supplied the current value of `field`.
    pub fn source_of(&self, field: Field) -> Source {
        self.values[field as usize]
            .as_ref()
            .map_or(Source::Default, |(_, source)| *source)
    }

    /// Record `raw` as the current value of `field`, replacing any value from
    /// a lower layer.
    pub(crate) fn set_raw(&mut self, field: Field, raw: String, source: Source) {
        self.values[field as usize] = Some((raw, source));
    }

    /// Build the final settings, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first field, in
    /// [`Field::ALL`] order, whose winning value cannot be coerced.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let mut settings = Settings::default();

        for field in Field::ALL {
            if let Some((raw, _)) = &self.values[field as usize] {
                assign(&mut settings, field, raw)?;
            }
        }

        Ok(settings)
    }
}

/// Coerce `raw` to the type of `field` and store it.
///
/// String fields are taken as written, including empty values.
fn assign(settings: &mut Settings, field: Field, raw: &str) -> Result<(), ConfigError> {
    match field {
        Field::GmailCredentialsPath => settings.gmail_credentials_path = raw.to_string(),
        Field::GmailTokenPath => settings.gmail_token_path = raw.to_string(),
        Field::OllamaHost => settings.ollama_host = raw.to_string(),
        Field::OllamaModel => settings.ollama_model = raw.to_string(),
        Field::StorageDir => settings.storage_dir = raw.to_string(),
        Field::LogLevel => settings.log_level = raw.to_string(),
        Field::LogFormat => settings.log_format = raw.to_string(),
        Field::ClassificationThreshold => {
            settings.classification_threshold = parse_threshold(field, raw)?
        }
        Field::MaxEmailsPerRun => settings.max_emails_per_run = parse_count(field, raw)?,
        Field::EnableEmbeddingClassification => {
            settings.enable_embedding_classification = parse_bool(field, raw)?
        }
        Field::EnableRuleEngine => settings.enable_rule_engine = parse_bool(field, raw)?,
        Field::DryRun => settings.dry_run = parse_bool(field, raw)?,
        Field::Debug => settings.debug = parse_bool(field, raw)?,
    }
    Ok(())
}

/// Load settings from defaults, the `.env` file and the process environment.
///
/// This is the single accessor the rest of the application calls. Each call
/// builds an independent `Settings`; construct it once at startup and pass it
/// to whatever needs it.
pub fn get_settings() -> Result<Settings, ConfigError> {
    SettingsLoader::new().load_dotenv()?.from_env()?.build()
}
