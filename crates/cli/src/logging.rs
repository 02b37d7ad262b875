//! Logging initialization from loaded settings.
//!
//! Responsibilities:
//! - Translate `LOG_LEVEL` / `DEBUG` into a tracing filter.
//! - Pick JSON or text rendering from `LOG_FORMAT`.
//!
//! Invariants:
//! - `RUST_LOG`, when set and valid, replaces the settings-derived filter.
//! - Log output goes to stderr so stdout stays machine-readable.
//! - An unusable `LOG_LEVEL` or `LOG_FORMAT` never stops the process: logging
//!   falls back to `info` / JSON and the problem is logged as a warning.

use mailbot_config::{ConfigError, Field, LogFormat, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map a level name to a filter. Accepts the common aliases
/// `warning`, `critical` and `fatal`.
pub fn level_filter(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "error" | "critical" | "fatal" => Some(LevelFilter::ERROR),
        "off" | "none" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Resolve the level filter for these settings.
pub fn settings_level(settings: &Settings) -> Result<LevelFilter, ConfigError> {
    level_filter(&settings.effective_log_level()).ok_or_else(|| ConfigError::InvalidValue {
        var: Field::LogLevel.env_name().to_string(),
        value: settings.log_level().to_string(),
        message: "must be one of trace, debug, info, warn(ing), error, critical, off".to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// Must be called at most once per process.
pub fn init(settings: &Settings) {
    let mut fallbacks = Vec::new();
    let level = settings_level(settings).unwrap_or_else(|e| {
        fallbacks.push(e);
        LevelFilter::INFO
    });
    let format = settings.log_format_kind().unwrap_or_else(|e| {
        fallbacks.push(e);
        LogFormat::Json
    });

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    for e in fallbacks {
        tracing::warn!(error = %e, "Using default logging setting");
    }
}
