use serde::{Deserialize, Serialize};

use super::prompt::{TranslationPrompt, format_prompt};
use crate::domain::DomainError;
use crate::domain::llm::LlmJsonSchema;

/// A query to rewrite from one engine's dialect into another's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_engine: String,
    pub target_engine: String,
    pub source_query: String,
}

impl TranslationRequest {
    pub fn new(
        source_engine: impl Into<String>,
        target_engine: impl Into<String>,
        source_query: impl Into<String>,
    ) -> Self {
        Self {
            source_engine: source_engine.into(),
            target_engine: target_engine.into(),
            source_query: source_query.into(),
        }
    }

    pub fn prompt(&self) -> TranslationPrompt {
        format_prompt(&self.source_engine, &self.target_engine, &self.source_query)
    }
}

/// Structured answer of the model.
///
/// `query` is `None` when the model declined to translate; `explanation`
/// is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub query: Option<String>,
    pub explanation: String,
}

impl TranslationResponse {
    /// Validates the decoded reply and normalizes a blank `query` to `None`.
    pub fn new(query: Option<String>, explanation: String) -> Result<Self, DomainError> {
        if explanation.trim().is_empty() {
            return Err(DomainError::validation("explanation must not be empty"));
        }

        let query = query.filter(|q| !q.trim().is_empty());

        Ok(Self { query, explanation })
    }

    pub fn is_translated(&self) -> bool {
        self.query.is_some()
    }

    /// JSON schema sent to providers that support schema-constrained output
    pub fn json_schema() -> LlmJsonSchema {
        LlmJsonSchema {
            name: "translation_response".to_string(),
            strict: true,
            schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": ["string", "null"],
                        "description": "The SQL query of the target engine"
                    },
                    "explanation": {
                        "type": "string",
                        "description": "Explaining the changes made to the query"
                    }
                },
                "required": ["query", "explanation"],
                "additionalProperties": false
            }),
        }
    }
}
