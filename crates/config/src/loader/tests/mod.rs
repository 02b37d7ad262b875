//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test default population and explicit environment snapshots.
//! - Test `.env` loading, precedence, and failure modes.
//! - Test process environment handling and case-insensitive matching.
//! - Test coercion failures surfaced through the loader.
//!
//! Invariants:
//! - Tests that touch process-global state use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

use crate::loader::fields::Field;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every host variable that names a setting removed, plus the
/// given overrides applied, and `DOTENV_DISABLED` unset.
pub fn with_clean_env<F, R>(overrides: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut vars: Vec<(OsString, Option<OsString>)> = std::env::vars_os()
        .filter(|(key, _)| key.to_str().and_then(Field::lookup).is_some())
        .filter(|(key, _)| !overrides.iter().any(|(k, _)| key.as_os_str() == OsStr::new(k)))
        .map(|(key, _)| (key, None))
        .collect();
    if !overrides.iter().any(|(k, _)| *k == "DOTENV_DISABLED") {
        vars.push(("DOTENV_DISABLED".into(), None));
    }
    for (key, value) in overrides {
        vars.push(((*key).into(), Some((*value).into())));
    }
    temp_env::with_vars(vars, f)
}
