//! Output formatters for the `show` command.
//!
//! Provides table, JSON and `.env` renderings of the resolved settings.

use anyhow::Result;
use mailbot_config::{Field, Settings, Source};
use serde_json::{Map, Value, json};

use crate::args::OutputFormat;

/// Render settings in the requested format.
///
/// `sources` is included when provided; the `.env` rendering never carries it.
pub fn format_settings(
    settings: &Settings,
    sources: Option<&[(Field, Source)]>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(settings, sources)),
        OutputFormat::Json => format_json(settings, sources),
        OutputFormat::Env => Ok(format_env(settings)),
    }
}

fn format_table(settings: &Settings, sources: Option<&[(Field, Source)]>) -> String {
    let key_width = Field::ALL
        .iter()
        .map(|f| f.env_name().len())
        .max()
        .unwrap_or(0);
    let value_width = Field::ALL
        .iter()
        .map(|f| settings.value_of(*f).len())
        .max()
        .unwrap_or(0)
        .max("VALUE".len());

    let mut output = String::new();
    match sources {
        Some(_) => output.push_str(&format!(
            "{:<key_width$}  {:<value_width$}  SOURCE\n",
            "SETTING", "VALUE"
        )),
        None => output.push_str(&format!("{:<key_width$}  VALUE\n", "SETTING")),
    }

    for field in Field::ALL {
        let value = settings.value_of(field);
        match sources {
            Some(sources) => {
                let source = source_for(sources, field);
                output.push_str(&format!(
                    "{:<key_width$}  {:<value_width$}  {}\n",
                    field.env_name(),
                    value,
                    source
                ));
            }
            None => output.push_str(&format!("{:<key_width$}  {}\n", field.env_name(), value)),
        }
    }

    output
}

fn format_json(settings: &Settings, sources: Option<&[(Field, Source)]>) -> Result<String> {
    let value = match sources {
        Some(sources) => {
            let mut by_name = Map::new();
            for (field, source) in sources {
                by_name.insert(field.env_name().to_string(), serde_json::to_value(source)?);
            }
            json!({ "settings": settings, "sources": Value::Object(by_name) })
        }
        None => serde_json::to_value(settings)?,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn format_env(settings: &Settings) -> String {
    Field::ALL
        .into_iter()
        .map(|field| {
            format!(
                "{}={}\n",
                field.env_name(),
                quote_env_value(&settings.value_of(field))
            )
        })
        .collect()
}

fn source_for(sources: &[(Field, Source)], field: Field) -> Source {
    sources
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, s)| *s)
        .unwrap_or_default()
}

/// Quote a value so a `.env` parser reads it back verbatim.
fn quote_env_value(value: &str) -> String {
    let is_plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-.:/@+,".contains(c));
    if is_plain {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
