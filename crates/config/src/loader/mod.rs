//! Settings loader for environment variables and the `.env` file.
//!
//! Responsibilities:
//! - Load settings from defaults, a `.env` file, and environment variables.
//! - Provide a builder-pattern `SettingsLoader` for layered merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting settings (settings are read-only).
//! - Logging setup (the loader itself never logs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` values, which take
//!   precedence over compiled-in defaults.
//! - Variable names are matched case-insensitively through an explicit table.

mod builder;
mod env;
mod error;
mod fields;
mod parse;

#[cfg(test)]
mod tests;

pub use builder::{SettingsLoader, get_settings};
pub use error::ConfigError;
pub use fields::{Field, Source};
pub use parse::{FALSY_TOKENS, TRUTHY_TOKENS};
