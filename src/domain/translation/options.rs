//! Fixed choices offered by the form UI

use serde::Serialize;

pub const MODEL_CHOICES: &[&str] = &[
    "gpt-4o-mini",
    "claude-3-5-sonnet-latest",
    "claude-3-7-sonnet-latest",
    "gemini-1.5-pro",
    "gemini-2.0-flash",
];

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub const SOURCE_ENGINES: &[&str] = &["SQL Server", "SAP BO"];

pub const TARGET_ENGINES: &[&str] = &["BigQuery"];

/// Choices rendered by the form, with their preselected values
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub models: Vec<&'static str>,
    pub default_model: &'static str,
    pub source_engines: Vec<&'static str>,
    pub target_engines: Vec<&'static str>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            models: MODEL_CHOICES.to_vec(),
            default_model: DEFAULT_MODEL,
            source_engines: SOURCE_ENGINES.to_vec(),
            target_engines: TARGET_ENGINES.to_vec(),
        }
    }
}
