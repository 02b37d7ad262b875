//! Settings types for mailbot.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{
    DEFAULT_CLASSIFICATION_THRESHOLD, DEFAULT_DEBUG, DEFAULT_DRY_RUN,
    DEFAULT_ENABLE_EMBEDDING_CLASSIFICATION, DEFAULT_ENABLE_RULE_ENGINE,
    DEFAULT_GMAIL_CREDENTIALS_PATH, DEFAULT_GMAIL_TOKEN_PATH, DEFAULT_LOG_FORMAT,
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_EMAILS_PER_RUN, DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_MODEL,
    DEFAULT_STORAGE_DIR,
};
use crate::loader::{ConfigError, Field};

/// Immutable application settings.
///
/// Built by [`crate::SettingsLoader`] or [`crate::get_settings`]. Fields are
/// read through accessors; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub(crate) gmail_credentials_path: String,
    pub(crate) gmail_token_path: String,
    pub(crate) ollama_host: String,
    pub(crate) ollama_model: String,
    pub(crate) storage_dir: String,
    pub(crate) log_level: String,
    pub(crate) log_format: String,
    pub(crate) classification_threshold: f64,
    pub(crate) max_emails_per_run: i64,
    pub(crate) enable_embedding_classification: bool,
    pub(crate) enable_rule_engine: bool,
    pub(crate) dry_run: bool,
    pub(crate) debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gmail_credentials_path: DEFAULT_GMAIL_CREDENTIALS_PATH.to_string(),
            gmail_token_path: DEFAULT_GMAIL_TOKEN_PATH.to_string(),
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            storage_dir: DEFAULT_STORAGE_DIR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            classification_threshold: DEFAULT_CLASSIFICATION_THRESHOLD,
            max_emails_per_run: DEFAULT_MAX_EMAILS_PER_RUN,
            enable_embedding_classification: DEFAULT_ENABLE_EMBEDDING_CLASSIFICATION,
            enable_rule_engine: DEFAULT_ENABLE_RULE_ENGINE,
            dry_run: DEFAULT_DRY_RUN,
            debug: DEFAULT_DEBUG,
        }
    }
}

impl Settings {
    /// Location of the Gmail API credential file.
    pub fn gmail_credentials_path(&self) -> &str {
        &self.gmail_credentials_path
    }

    /// Location of the cached Gmail auth token.
    pub fn gmail_token_path(&self) -> &str {
        &self.gmail_token_path
    }

    /// Base URL of the local Ollama server, as configured.
    pub fn ollama_host(&self) -> &str {
        &self.ollama_host
    }

    pub fn ollama_model(&self) -> &str {
        &self.ollama_model
    }

    /// Root directory for locally persisted data.
    pub fn storage_dir(&self) -> &str {
        &self.storage_dir
    }

    /// Configured log level name, as written.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Configured log format name, as written.
    pub fn log_format(&self) -> &str {
        &self.log_format
    }

    /// Decision cutoff for embedding classification, expected within `[0, 1]`.
    pub fn classification_threshold(&self) -> f64 {
        self.classification_threshold
    }

    /// Upper bound on emails processed per run.
    pub fn max_emails_per_run(&self) -> i64 {
        self.max_emails_per_run
    }

    pub fn enable_embedding_classification(&self) -> bool {
        self.enable_embedding_classification
    }

    pub fn enable_rule_engine(&self) -> bool {
        self.enable_rule_engine
    }

    /// Whether to simulate actions without side effects.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Render a field's value as it would be written in a `.env` file.
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::GmailCredentialsPath => self.gmail_credentials_path.clone(),
            Field::GmailTokenPath => self.gmail_token_path.clone(),
            Field::OllamaHost => self.ollama_host.clone(),
            Field::OllamaModel => self.ollama_model.clone(),
            Field::StorageDir => self.storage_dir.clone(),
            Field::LogLevel => self.log_level.clone(),
            Field::LogFormat => self.log_format.clone(),
            Field::ClassificationThreshold => self.classification_threshold.to_string(),
            Field::MaxEmailsPerRun => self.max_emails_per_run.to_string(),
            Field::EnableEmbeddingClassification => {
                self.enable_embedding_classification.to_string()
            }
            Field::EnableRuleEngine => self.enable_rule_engine.to_string(),
            Field::DryRun => self.dry_run.to_string(),
            Field::Debug => self.debug.to_string(),
        }
    }

    /// Parse `ollama_host` as an absolute http(s) URL with a host.
    pub fn ollama_url(&self) -> Result<url::Url, ConfigError> {
        let raw = self.ollama_host.trim();
        let invalid = |message: String| ConfigError::InvalidValue {
            var: Field::OllamaHost.env_name().to_string(),
            value: self.ollama_host.clone(),
            message,
        };

        let parsed = url::Url::parse(raw).map_err(|e| {
            invalid(format!(
                "must be an absolute http(s) URL with a host (e.g. http://localhost:11434): {e}"
            ))
        })?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(invalid(format!("scheme must be http or https, got: {scheme}")));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("host is required".to_string()));
        }
        Ok(parsed)
    }

    /// Parse `log_format` into a [`LogFormat`].
    pub fn log_format_kind(&self) -> Result<LogFormat, ConfigError> {
        self.log_format
            .parse()
            .map_err(|message| ConfigError::InvalidValue {
                var: Field::LogFormat.env_name().to_string(),
                value: self.log_format.clone(),
                message,
            })
    }

    /// Log level to use, lower-cased. `debug` forces `"debug"`.
    pub fn effective_log_level(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.trim().to_ascii_lowercase()
        }
    }
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable text.
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "plain" | "pretty" => Ok(LogFormat::Text),
            _ => Err("must be json or text (plain/pretty)".to_string()),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => f.write_str("json"),
            LogFormat::Text => f.write_str("text"),
        }
    }
}
