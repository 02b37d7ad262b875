//! Integration tests for `mailbot show`.
//!
//! Responsibilities:
//! - Verify defaults, environment overrides and `.env` precedence end to end.
//! - Verify each output format.

mod common;

use common::{mailbot_cmd, mailbot_cmd_with_dotenv};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn show_json(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd
        .args(["show", "--output", "json"])
        .output()
        .expect("Failed to run command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_show_defaults_as_json() {
    let value = show_json(&mut mailbot_cmd());
    assert_eq!(value["gmail_credentials_path"], "credentials.json");
    assert_eq!(value["gmail_token_path"], "token.json");
    assert_eq!(value["ollama_host"], "http://localhost:11434");
    assert_eq!(value["ollama_model"], "nomic-embed-text");
    assert_eq!(value["storage_dir"], ".gmail-bot-data");
    assert_eq!(value["log_level"], "INFO");
    assert_eq!(value["log_format"], "json");
    assert_eq!(value["classification_threshold"], 0.7);
    assert_eq!(value["max_emails_per_run"], 100);
    assert_eq!(value["enable_embedding_classification"], true);
    assert_eq!(value["enable_rule_engine"], true);
    assert_eq!(value["dry_run"], false);
    assert_eq!(value["debug"], false);
}

#[test]
fn test_show_environment_overrides() {
    let mut cmd = mailbot_cmd();
    cmd.env("DRY_RUN", "true").env("MAX_EMAILS_PER_RUN", "5");
    let value = show_json(&mut cmd);
    assert_eq!(value["dry_run"], true);
    assert_eq!(value["max_emails_per_run"], 5);
    assert_eq!(value["debug"], false);
    assert_eq!(value["ollama_model"], "nomic-embed-text");
}

#[test]
fn test_show_lowercase_environment_key() {
    let mut cmd = mailbot_cmd();
    cmd.env("ollama_model", "all-minilm");
    let value = show_json(&mut cmd);
    assert_eq!(value["ollama_model"], "all-minilm");
}

#[test]
fn test_environment_beats_dotenv() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "LOG_LEVEL=WARNING\nSTORAGE_DIR=/from/file\n",
    )
    .unwrap();

    let mut cmd = mailbot_cmd_with_dotenv();
    cmd.current_dir(temp_dir.path()).env("LOG_LEVEL", "ERROR");
    let value = show_json(&mut cmd);
    assert_eq!(value["log_level"], "ERROR");
    assert_eq!(value["storage_dir"], "/from/file");
}

#[test]
fn test_custom_env_file_and_no_dotenv() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join("mailbot.env");
    fs::write(&env_file, "ENABLE_RULE_ENGINE=false\n").unwrap();

    let mut cmd = mailbot_cmd_with_dotenv();
    cmd.arg("--env-file").arg(&env_file);
    let value = show_json(&mut cmd);
    assert_eq!(value["enable_rule_engine"], false);

    let mut cmd = mailbot_cmd_with_dotenv();
    cmd.arg("--env-file").arg(&env_file).arg("--no-dotenv");
    let value = show_json(&mut cmd);
    assert_eq!(value["enable_rule_engine"], true);
}

#[test]
fn test_show_table_with_sources() {
    mailbot_cmd()
        .env("DEBUG", "1")
        .args(["show", "--sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SOURCE"))
        .stdout(predicate::str::is_match(r"(?m)^DEBUG\s+true\s+environment$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^DRY_RUN\s+false\s+default$").unwrap());
}

#[test]
fn test_show_env_format() {
    mailbot_cmd()
        .args(["show", "--output", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OLLAMA_HOST=http://localhost:11434\n"))
        .stdout(predicate::str::contains("CLASSIFICATION_THRESHOLD=0.7\n"));
}
