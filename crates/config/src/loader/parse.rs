//! Coercion of raw string values to typed settings.
//!
//! Responsibilities:
//! - Convert raw `.env` / environment strings into booleans and numbers.
//! - Produce `ConfigError::InvalidValue` naming the variable and raw value.
//!
//! Invariants:
//! - Boolean and numeric values are trimmed before parsing.
//! - Boolean tokens are matched case-insensitively against a fixed set.
//! - Empty values are not special: they fail like any other malformed value.
//! - Numbers are only checked for syntax. Range checks belong to callers.

use super::error::ConfigError;
use super::fields::Field;

/// Tokens accepted as `true`.
pub const TRUTHY_TOKENS: &[&str] = &["1", "true", "t", "yes", "y", "on"];

/// Tokens accepted as `false`.
pub const FALSY_TOKENS: &[&str] = &["0", "false", "f", "no", "n", "off"];

fn invalid(field: Field, raw: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var: field.env_name().to_string(),
        value: raw.to_string(),
        message: message.into(),
    }
}

/// Parse a boolean toggle.
pub fn parse_bool(field: Field, raw: &str) -> Result<bool, ConfigError> {
    let token = raw.trim();
    if TRUTHY_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        Ok(true)
    } else if FALSY_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        Ok(false)
    } else {
        Err(invalid(
            field,
            raw,
            "must be one of 1/true/t/yes/y/on or 0/false/f/no/n/off",
        ))
    }
}

/// Parse the classification threshold.
///
/// Any `f64` literal is accepted, including `inf` and `NaN`.
pub fn parse_threshold(field: Field, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(field, raw, "must be a number"))
}

/// Parse a signed integer count.
pub fn parse_count(field: Field, raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(field, raw, "must be an integer"))
}
