//! `check` command: validate typed views of the resolved settings.
//!
//! Loading already rejects malformed booleans and numbers; this command also
//! verifies the fields that are plain strings at load time but must be
//! well-formed for collaborators (Ollama URL, log level, log format).
//! Numbers outside their expected range are reported as warnings only.

use anyhow::{Context, Result};
use mailbot_config::constants::{MAX_CLASSIFICATION_THRESHOLD, MIN_CLASSIFICATION_THRESHOLD};
use mailbot_config::{ConfigError, Field, Settings};

use crate::logging::settings_level;

/// Collect every problem with the settings, in field order.
pub fn validate(settings: &Settings) -> Vec<ConfigError> {
    let mut problems = Vec::new();
    if let Err(e) = settings.ollama_url() {
        problems.push(e);
    }
    if let Err(e) = settings_level(settings) {
        problems.push(e);
    }
    if let Err(e) = settings.log_format_kind() {
        problems.push(e);
    }
    problems
}

/// Values that load fine but are outside the range collaborators expect.
pub fn range_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    let threshold = settings.classification_threshold();
    if !(MIN_CLASSIFICATION_THRESHOLD..=MAX_CLASSIFICATION_THRESHOLD).contains(&threshold) {
        warnings.push(format!(
            "{} is {threshold}, expected between {} and {}",
            Field::ClassificationThreshold.env_name(),
            MIN_CLASSIFICATION_THRESHOLD,
            MAX_CLASSIFICATION_THRESHOLD,
        ));
    }

    let max_emails = settings.max_emails_per_run();
    if max_emails < 0 {
        warnings.push(format!(
            "{} is {max_emails}, expected a non-negative count",
            Field::MaxEmailsPerRun.env_name(),
        ));
    }

    warnings
}

pub fn run(settings: &Settings) -> Result<()> {
    for warning in range_warnings(settings) {
        eprintln!("Warning: {warning}");
    }

    let mut problems = validate(settings).into_iter();
    let Some(first) = problems.next() else {
        tracing::info!(
            dry_run = settings.dry_run(),
            max_emails_per_run = settings.max_emails_per_run(),
            "Settings check passed"
        );
        println!("ok");
        return Ok(());
    };

    let mut count = 1;
    for problem in problems {
        eprintln!("{problem}");
        count += 1;
    }
    Err(first).with_context(|| format!("Settings check failed with {count} problem(s)"))
}
