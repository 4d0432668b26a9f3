//! Translation service - turns one query into another engine's dialect

use tracing::{info, warn};

use crate::domain::{DomainError, TranslationRequest, TranslationResponse};
use crate::infrastructure::llm::StructuredClient;
use crate::infrastructure::sql;

/// Stateless translation handler shared by the CLI and the web UI
#[derive(Debug, Default, Clone)]
pub struct TranslationService;

impl TranslationService {
    pub fn new() -> Self {
        Self
    }

    /// Translate `query` from `source_engine` to `target_engine` with one
    /// call to `client`.
    ///
    /// The model's answer is returned as-is; a declined translation comes back
    /// as `Ok` with no query.
    pub async fn swap(
        &self,
        client: &StructuredClient,
        query: &str,
        source_engine: &str,
        target_engine: &str,
    ) -> Result<TranslationResponse, DomainError> {
        let request = TranslationRequest::new(source_engine, target_engine, query);
        let prompt = request.prompt();

        info!(
            provider = %client.kind(),
            model = %client.model(),
            source_engine,
            target_engine,
            "Translating query"
        );

        let response = client.invoke(prompt.into_messages()).await?;

        if !response.is_translated() {
            warn!(explanation = %response.explanation, "Model declined to translate query");
        }

        Ok(response)
    }

    pub fn validate_syntax(&self, query: Option<&str>) -> bool {
        sql::validate_syntax(query)
    }
}
