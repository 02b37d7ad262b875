//! Centralized default values for mailbot settings.
//!
//! Every setting has a compiled-in default so that `Settings` is fully
//! populated even with zero external configuration.

// =============================================================================
// Gmail API
// =============================================================================

/// Default location of the Gmail API OAuth client credentials.
pub const DEFAULT_GMAIL_CREDENTIALS_PATH: &str = "credentials.json";

/// Default location of the cached Gmail OAuth token.
pub const DEFAULT_GMAIL_TOKEN_PATH: &str = "token.json";

// =============================================================================
// Ollama
// =============================================================================

/// Default base URL of the local Ollama server.
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Default embedding model requested from Ollama.
pub const DEFAULT_OLLAMA_MODEL: &str = "nomic-embed-text";

// =============================================================================
// Storage & Logging
// =============================================================================

/// Default root directory for locally persisted data.
pub const DEFAULT_STORAGE_DIR: &str = ".gmail-bot-data";

/// Default log verbosity.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log rendering.
pub const DEFAULT_LOG_FORMAT: &str = "json";

// =============================================================================
// Classification
// =============================================================================

/// Default decision cutoff for embedding classification.
pub const DEFAULT_CLASSIFICATION_THRESHOLD: f64 = 0.7;

/// Expected inclusive range for the classification threshold.
///
/// Not enforced while loading; any float is accepted.
pub const MIN_CLASSIFICATION_THRESHOLD: f64 = 0.0;
pub const MAX_CLASSIFICATION_THRESHOLD: f64 = 1.0;

/// Default upper bound on emails processed per run.
pub const DEFAULT_MAX_EMAILS_PER_RUN: i64 = 100;

// =============================================================================
// Feature Flags
// =============================================================================

pub const DEFAULT_ENABLE_EMBEDDING_CLASSIFICATION: bool = true;
pub const DEFAULT_ENABLE_RULE_ENGINE: bool = true;
pub const DEFAULT_DRY_RUN: bool = false;
pub const DEFAULT_DEBUG: bool = false;

// =============================================================================
// Loader
// =============================================================================

/// File name of the optional local environment file.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
