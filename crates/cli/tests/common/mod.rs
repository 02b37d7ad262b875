//! Shared test utilities for mailbot integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents host leakage.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Every variable that names a setting is removed, in any spelling.

use assert_cmd::Command;

/// Names of all settings variables.
pub const SETTINGS_VARS: &[&str] = &[
    "GMAIL_CREDENTIALS_PATH",
    "GMAIL_TOKEN_PATH",
    "OLLAMA_HOST",
    "OLLAMA_MODEL",
    "STORAGE_DIR",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "CLASSIFICATION_THRESHOLD",
    "MAX_EMAILS_PER_RUN",
    "ENABLE_EMBEDDING_CLASSIFICATION",
    "ENABLE_RULE_ENGINE",
    "DRY_RUN",
    "DEBUG",
];

/// Returns a hermetic `mailbot` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Host variables naming a setting (any case) are cleared.
/// - `RUST_LOG` and `MAILBOT_ENV_FILE` are cleared.
pub fn mailbot_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mailbot");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG").env_remove("MAILBOT_ENV_FILE");

    for (key, _) in std::env::vars() {
        if SETTINGS_VARS.iter().any(|v| v.eq_ignore_ascii_case(&key)) {
            cmd.env_remove(&key);
        }
    }

    cmd
}

/// Returns a hermetic `mailbot` command with dotenv loading enabled.
#[allow(dead_code)]
pub fn mailbot_cmd_with_dotenv() -> Command {
    let mut cmd = mailbot_cmd();
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}
