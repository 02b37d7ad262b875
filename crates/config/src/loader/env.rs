//! Environment variable layer.
//!
//! Responsibilities:
//! - Select the environment entries that name a known setting.
//! - Apply them to a SettingsLoader with `Source::Environment`.
//!
//! Does NOT handle:
//! - .env file loading (handled by SettingsLoader::load_dotenv).
//! - Building the final Settings (see builder.rs).
//!
//! Invariants:
//! - Keys are matched case-insensitively via `Field::lookup`.
//! - When several spellings of one key are present, the canonical upper-case
//!   spelling wins; otherwise the lexicographically smallest key wins.
//! - Keys that are not valid UTF-8 are ignored. A matching key whose value is
//!   not valid UTF-8 is an error.

use std::collections::BTreeMap;
use std::ffi::OsString;

use super::builder::SettingsLoader;
use super::error::ConfigError;
use super::fields::{Field, Source};

/// Pick one `(key, value)` per field from an environment snapshot.
pub(crate) fn select_vars<I, K, V>(vars: I) -> BTreeMap<Field, (String, V)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
{
    let mut selected: BTreeMap<Field, (String, V)> = BTreeMap::new();

    for (key, value) in vars {
        let key: OsString = key.into();
        let Ok(key) = key.into_string() else {
            continue;
        };
        let Some(field) = Field::lookup(&key) else {
            continue;
        };

        let replace = match selected.get(&field) {
            None => true,
            Some((existing, _)) => {
                !field.is_canonical(existing) && (field.is_canonical(&key) || key < *existing)
            }
        };
        if replace {
            selected.insert(field, (key, value));
        }
    }

    selected
}

/// Apply an environment snapshot to the loader.
///
/// Environment values take precedence over `.env` file values.
pub(crate) fn apply_env<I, K, V>(loader: &mut SettingsLoader, vars: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    for (field, (key, value)) in select_vars(vars) {
        let value: OsString = value.into();
        let value = value
            .into_string()
            .map_err(|raw| ConfigError::InvalidValue {
                var: field.env_name().to_string(),
                value: raw.to_string_lossy().into_owned(),
                message: format!("value of {key} is not valid UTF-8"),
            })?;
        loader.set_raw(field, value, Source::Environment);
    }
    Ok(())
}
