//! Settings management for mailbot.
//!
//! This crate provides the typed `Settings` record and the loader that
//! populates it from compiled-in defaults, an optional `.env` file, and
//! environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, FALSY_TOKENS, Field, SettingsLoader, Source, TRUTHY_TOKENS, get_settings,
};
pub use types::{LogFormat, Settings};
