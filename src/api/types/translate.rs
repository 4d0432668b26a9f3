//! Request and response bodies of `/api/translate`

use serde::{Deserialize, Serialize};

use crate::domain::TranslationResponse;
use crate::domain::translation::options::{MODEL_CHOICES, SOURCE_ENGINES, TARGET_ENGINES};

pub const MISSING_MODEL: &str = "Please select the LLM Model";
pub const MISSING_SOURCE_ENGINE: &str = "Please select the Source Engine";
pub const MISSING_TARGET_ENGINE: &str = "Please select the Target Engine";
pub const MISSING_QUERY: &str = "Please enter a query";

/// Form submission; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranslateRequest {
    pub model: Option<String>,
    pub source_engine: Option<String>,
    pub target_engine: Option<String>,
    pub query: Option<String>,
}

/// A submission with every field filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateForm {
    pub model: String,
    pub source_engine: String,
    pub target_engine: String,
    pub query: String,
}

impl TranslateRequest {
    /// Check every field, collecting one message per empty or unknown one.
    ///
    /// Selections must be one of the offered choices. The query is kept as
    /// typed.
    pub fn validate(self) -> Result<TranslateForm, Vec<String>> {
        let mut errors = Vec::new();

        let model = selected(self.model, MODEL_CHOICES, MISSING_MODEL, &mut errors);
        let source_engine =
            selected(self.source_engine, SOURCE_ENGINES, MISSING_SOURCE_ENGINE, &mut errors);
        let target_engine =
            selected(self.target_engine, TARGET_ENGINES, MISSING_TARGET_ENGINE, &mut errors);
        let query = required(self.query, MISSING_QUERY, &mut errors);

        match (model, source_engine, target_engine, query) {
            (Some(model), Some(source_engine), Some(target_engine), Some(query)) => {
                Ok(TranslateForm {
                    model,
                    source_engine,
                    target_engine,
                    query,
                })
            }
            _ => Err(errors),
        }
    }
}

fn selected(
    value: Option<String>,
    choices: &[&str],
    message: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(v) if choices.contains(&v.as_str()) => Some(v),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

fn required(value: Option<String>, message: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Empty when the model declined
    pub query: String,
    pub is_valid: bool,
    pub explanation: String,
}

impl TranslateResponse {
    pub fn from_domain(response: TranslationResponse, is_valid: bool) -> Self {
        Self {
            query: response.query.unwrap_or_default(),
            is_valid,
            explanation: response.explanation,
        }
    }
}
