//! Schema-constrained client returning [`TranslationResponse`] values

use std::sync::Arc;

use tracing::{debug, warn};

use super::LlmProviderFactory;
use crate::config::ProviderConfig;
use crate::domain::llm::LlmResponseFormat;
use crate::domain::{
    DomainError, FinishReason, LlmProvider, LlmRequest, Message, ProviderKind, TranslationResponse,
};

/// An LLM client whose replies are coerced into the two-field translation schema.
///
/// Stateless apart from the immutable provider handle, so one instance can be
/// shared between concurrent callers.
#[derive(Debug, Clone)]
pub struct StructuredClient {
    kind: ProviderKind,
    model: String,
    provider: Arc<dyn LlmProvider>,
}

impl StructuredClient {
    pub fn new(kind: ProviderKind, model: impl Into<String>, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            kind,
            model: model.into(),
            provider,
        }
    }

    /// Build a client for `provider`/`model`.
    ///
    /// An unrecognized provider, an empty model name or a missing API key
    /// fail here; nothing is sent over the network.
    pub fn create(provider: &str, model: &str, config: &ProviderConfig) -> Result<Self, DomainError> {
        let kind: ProviderKind = provider.parse()?;

        if model.trim().is_empty() {
            return Err(DomainError::configuration("LLM model is not set"));
        }

        let llm = LlmProviderFactory::create(kind, config)?;

        Ok(Self::new(kind, model.trim(), llm))
    }

    /// Build a client from `LLM_PROVIDER` and `LLM_MODEL`
    pub fn from_config(config: &ProviderConfig) -> Result<Self, DomainError> {
        let provider = config
            .provider
            .as_deref()
            .ok_or_else(|| DomainError::configuration("Invalid LLM provider: LLM_PROVIDER is not set"))?;
        let model = config.model.as_deref().unwrap_or_default();

        Self::create(provider, model, config)
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the messages as one exchange and decode the structured reply
    pub async fn invoke(&self, messages: Vec<Message>) -> Result<TranslationResponse, DomainError> {
        let request = LlmRequest::builder()
            .messages(messages)
            .response_format(LlmResponseFormat::JsonSchema {
                json_schema: TranslationResponse::json_schema(),
            })
            .build();

        debug!(provider = %self.kind, model = %self.model, "Invoking LLM");

        let response = self.provider.chat(&self.model, request).await?;

        if let Some(ref usage) = response.usage {
            debug!(
                provider = %self.kind,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "LLM usage"
            );
        }

        if response.finish_reason == Some(FinishReason::Length) {
            warn!(provider = %self.kind, model = %self.model, "LLM reply was truncated");
        }

        parse_structured_reply(self.kind.as_str(), response.content())
    }
}

/// Decode the outermost JSON object of a reply into a [`TranslationResponse`].
///
/// Text around the object, such as Markdown code fences, is ignored.
pub fn parse_structured_reply(provider: &str, text: &str) -> Result<TranslationResponse, DomainError> {
    let json = extract_json_object(text).ok_or_else(|| {
        DomainError::malformed_response(provider, "reply does not contain a JSON object")
    })?;

    let decoded: TranslationResponse = serde_json::from_str(json)
        .map_err(|e| DomainError::malformed_response(provider, e.to_string()))?;

    TranslationResponse::new(decoded.query, decoded.explanation)
        .map_err(|e| DomainError::malformed_response(provider, e.to_string()))
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CANNOT_PROCESS_EXPLANATION;
    use crate::domain::llm::MockLlmProvider;

    fn client_replying(content: &str) -> (StructuredClient, Arc<MockLlmProvider>) {
        let mock = Arc::new(MockLlmProvider::new("mock").with_content(content));
        let client = StructuredClient::new(ProviderKind::Ollama, "llama3.2", mock.clone());
        (client, mock)
    }

    #[tokio::test]
    async fn test_invoke_returns_structured_response() {
        let (client, mock) = client_replying(
            r#"{"query": "SELECT * FROM Orders LIMIT 5;", "explanation": "TOP becomes LIMIT"}"#,
        );

        let response = client
            .invoke(vec![Message::system("s"), Message::user("h")])
            .await
            .unwrap();

        assert_eq!(response.query.as_deref(), Some("SELECT * FROM Orders LIMIT 5;"));
        assert_eq!(response.explanation, "TOP becomes LIMIT");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages.len(), 2);
        assert_eq!(
            requests[0].json_schema().map(|s| s.name.as_str()),
            Some("translation_response")
        );
    }

    #[tokio::test]
    async fn test_invoke_declined_translation() {
        let (client, _) = client_replying(
            r#"{"query": null, "explanation": "I can't process this query!"}"#,
        );

        let response = client.invoke(vec![Message::user("???")]).await.unwrap();

        assert!(response.query.is_none());
        assert_eq!(response.explanation, CANNOT_PROCESS_EXPLANATION);
    }

    #[tokio::test]
    async fn test_invoke_rejects_free_text() {
        let (client, _) = client_replying("Sure! Here is your query: SELECT 1");

        let result = client.invoke(vec![Message::user("x")]).await;
        assert!(matches!(result, Err(DomainError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn test_invoke_propagates_provider_errors() {
        let mock = Arc::new(MockLlmProvider::new("mock").with_error("HTTP 500"));
        let client = StructuredClient::new(ProviderKind::OpenAi, "gpt-4o-mini", mock);

        let result = client.invoke(vec![Message::user("x")]).await;
        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[test]
    fn test_parse_fenced_reply() {
        let reply = "```json\n{\"query\": \"SELECT 1\", \"explanation\": \"same\"}\n```";
        let response = parse_structured_reply("anthropic", reply).unwrap();
        assert_eq!(response.query.as_deref(), Some("SELECT 1"));
    }

    #[test]
    fn test_parse_missing_explanation() {
        let err = parse_structured_reply("openai", r#"{"query": "SELECT 1"}"#).unwrap_err();
        assert!(err.to_string().contains("explanation"));
    }

    #[test]
    fn test_parse_empty_explanation() {
        let result = parse_structured_reply("openai", r#"{"query": null, "explanation": ""}"#);
        assert!(matches!(result, Err(DomainError::MalformedResponse { .. })));
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let result = parse_structured_reply("google", r#"{"query": 42, "explanation": "x"}"#);
        assert!(matches!(result, Err(DomainError::MalformedResponse { .. })));
    }

    #[test]
    fn test_create_rejects_unknown_provider() {
        let result = StructuredClient::create("azure", "gpt-4o", &ProviderConfig::default());
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_create_rejects_empty_model() {
        let result = StructuredClient::create("ollama", "  ", &ProviderConfig::default());
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_from_config() {
        let config = ProviderConfig {
            provider: Some("ollama".to_string()),
            model: Some("llama3.2".to_string()),
            ..ProviderConfig::default()
        };

        let client = StructuredClient::from_config(&config).unwrap();
        assert_eq!(client.kind(), ProviderKind::Ollama);
        assert_eq!(client.model(), "llama3.2");
    }

    #[test]
    fn test_from_config_without_provider() {
        let result = StructuredClient::from_config(&ProviderConfig::default());
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
