//! Field-to-variable mapping table.
//!
//! Responsibilities:
//! - Enumerate every setting the loader understands.
//! - Map each setting to its canonical external variable name.
//! - Resolve external keys to settings case-insensitively.
//!
//! Does NOT handle:
//! - Parsing raw values (see parse.rs).
//! - Deciding precedence between layers (see builder.rs).
//!
//! Invariants:
//! - `Field::ALL` lists every variant exactly once, in declaration order.
//! - Canonical names are upper-case ASCII and unique ignoring case.

use std::fmt;

use serde::Serialize;

/// A single setting recognized by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    GmailCredentialsPath,
    GmailTokenPath,
    OllamaHost,
    OllamaModel,
    StorageDir,
    LogLevel,
    LogFormat,
    ClassificationThreshold,
    MaxEmailsPerRun,
    EnableEmbeddingClassification,
    EnableRuleEngine,
    DryRun,
    Debug,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 13] = [
        Field::GmailCredentialsPath,
        Field::GmailTokenPath,
        Field::OllamaHost,
        Field::OllamaModel,
        Field::StorageDir,
        Field::LogLevel,
        Field::LogFormat,
        Field::ClassificationThreshold,
        Field::MaxEmailsPerRun,
        Field::EnableEmbeddingClassification,
        Field::EnableRuleEngine,
        Field::DryRun,
        Field::Debug,
    ];

    /// Canonical environment variable name for this field.
    pub const fn env_name(self) -> &'static str {
        match self {
            Field::GmailCredentialsPath => "GMAIL_CREDENTIALS_PATH",
            Field::GmailTokenPath => "GMAIL_TOKEN_PATH",
            Field::OllamaHost => "OLLAMA_HOST",
            Field::OllamaModel => "OLLAMA_MODEL",
            Field::StorageDir => "STORAGE_DIR",
            Field::LogLevel => "LOG_LEVEL",
            Field::LogFormat => "LOG_FORMAT",
            Field::ClassificationThreshold => "CLASSIFICATION_THRESHOLD",
            Field::MaxEmailsPerRun => "MAX_EMAILS_PER_RUN",
            Field::EnableEmbeddingClassification => "ENABLE_EMBEDDING_CLASSIFICATION",
            Field::EnableRuleEngine => "ENABLE_RULE_ENGINE",
            Field::DryRun => "DRY_RUN",
            Field::Debug => "DEBUG",
        }
    }

    /// Resolve an external key to a field, ignoring ASCII case.
    pub fn lookup(key: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.env_name().eq_ignore_ascii_case(key))
    }

    /// Returns true if `key` is spelled exactly as the canonical name.
    pub(crate) fn is_canonical(self, key: &str) -> bool {
        self.env_name() == key
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// The configuration layer that supplied a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Compiled-in default.
    #[default]
    Default,
    /// The local `.env` file.
    DotenvFile,
    /// The process environment (or an explicit snapshot of it).
    Environment,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Source::Default => "default",
            Source::DotenvFile => ".env",
            Source::Environment => "environment",
        };
        f.write_str(label)
    }
}
