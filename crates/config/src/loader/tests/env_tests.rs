//! Process environment tests for the settings loader.
//!
//! Responsibilities:
//! - Test that a clean environment yields the defaults.
//! - Test case-insensitive variable matching.
//! - Test that each spelling of a key produces an identical result.

use serial_test::serial;

use super::{env_lock, with_clean_env};
use crate::loader::builder::{SettingsLoader, get_settings};
use crate::loader::fields::{Field, Source};
use crate::types::Settings;

#[test]
#[serial]
fn test_clean_environment_yields_defaults() {
    let _lock = env_lock().lock().unwrap();
    with_clean_env(&[("DOTENV_DISABLED", "1")], || {
        assert_eq!(get_settings().unwrap(), Settings::default());
    });
}

#[test]
#[serial]
fn test_env_example_dry_run_and_max_emails() {
    let _lock = env_lock().lock().unwrap();
    with_clean_env(
        &[
            ("DOTENV_DISABLED", "1"),
            ("DRY_RUN", "true"),
            ("MAX_EMAILS_PER_RUN", "5"),
        ],
        || {
            let settings = get_settings().unwrap();
            assert!(settings.dry_run());
            assert_eq!(settings.max_emails_per_run(), 5);
            assert_eq!(settings.ollama_model(), "nomic-embed-text");
            assert!(settings.enable_rule_engine());
            assert!(!settings.debug());
        },
    );
}

#[test]
#[serial]
fn test_key_spelling_does_not_change_result() {
    let _lock = env_lock().lock().unwrap();

    let results: Vec<Settings> = ["log_level", "LOG_LEVEL", "Log_Level"]
        .into_iter()
        .map(|key| {
            with_clean_env(&[(key, "WARNING")], || {
                SettingsLoader::new().from_env().unwrap().build().unwrap()
            })
        })
        .collect();

    assert_eq!(results[0].log_level(), "WARNING");
    assert_eq!(results[0], results[1]);
    assert_eq!(results[1], results[2]);
}

#[test]
#[serial]
fn test_from_env_records_environment_source() {
    let _lock = env_lock().lock().unwrap();
    with_clean_env(&[("enable_embedding_classification", "0")], || {
        let loader = SettingsLoader::new().from_env().unwrap();
        assert_eq!(
            loader.source_of(Field::EnableEmbeddingClassification),
            Source::Environment
        );
        assert_eq!(loader.source_of(Field::EnableRuleEngine), Source::Default);
        assert!(!loader.build().unwrap().enable_embedding_classification());
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_is_an_invalid_override() {
    let _lock = env_lock().lock().unwrap();
    with_clean_env(&[("CLASSIFICATION_THRESHOLD", "   ")], || {
        let loader = SettingsLoader::new().from_env().unwrap();
        assert_eq!(
            loader.source_of(Field::ClassificationThreshold),
            Source::Environment
        );
        let err = loader.build().unwrap_err();
        assert_eq!(err.var(), Some("CLASSIFICATION_THRESHOLD"));
    });
}

#[test]
#[serial]
fn test_each_call_builds_independent_settings() {
    let _lock = env_lock().lock().unwrap();
    with_clean_env(&[("DOTENV_DISABLED", "1"), ("OLLAMA_MODEL", "first")], || {
        let first = get_settings().unwrap();
        temp_env::with_var("OLLAMA_MODEL", Some("second"), || {
            let second = get_settings().unwrap();
            assert_eq!(first.ollama_model(), "first");
            assert_eq!(second.ollama_model(), "second");
        });
    });
}

#[cfg(unix)]
#[test]
fn test_non_utf8_value_is_rejected() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let vars = vec![(
        OsString::from("OLLAMA_MODEL"),
        OsString::from_vec(vec![0x66, 0xff, 0x6f]),
    )];
    let err = SettingsLoader::new().from_vars(vars).unwrap_err();
    assert_eq!(err.var(), Some("OLLAMA_MODEL"));
}
