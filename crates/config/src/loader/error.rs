//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for all settings loading failures.
//!
//! Invariants:
//! - Coercion errors name the canonical variable and carry the raw value.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value from the `.env` file or the environment could not be coerced
    /// to the field's declared type.
    #[error("Invalid value for {var}: {value:?} ({message})")]
    InvalidValue {
        var: String,
        value: String,
        message: String,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// The `.env` file exists but could not be read (permissions, encoding).
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// The variable name this error refers to, if it concerns a single field.
    pub fn var(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { var, .. } => Some(var.as_str()),
            _ => None,
        }
    }

    /// Returns true if the `.env` file itself could not be loaded.
    pub fn is_dotenv_error(&self) -> bool {
        matches!(
            self,
            ConfigError::DotenvParse { .. }
                | ConfigError::DotenvIo { .. }
                | ConfigError::DotenvUnknown
        )
    }
}
