use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::http_client::HttpClient;
use super::{AnthropicProvider, GoogleProvider, OllamaProvider, OpenAiProvider};
use crate::config::ProviderConfig;
use crate::domain::{DomainError, LlmProvider, ProviderKind};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the provider for `kind` with the keys and endpoints of `config`.
    ///
    /// Keyed providers fail here when their API key is missing, before any
    /// request is sent.
    pub fn create(
        kind: ProviderKind,
        config: &ProviderConfig,
    ) -> Result<Arc<dyn LlmProvider>, DomainError> {
        let http_client = Self::http_client(config)?;

        let provider: Arc<dyn LlmProvider> = match kind {
            ProviderKind::OpenAi => {
                let api_key = Self::require_api_key(kind, config)?;
                Arc::new(OpenAiProvider::new(http_client, api_key))
            }
            ProviderKind::Anthropic => {
                let api_key = Self::require_api_key(kind, config)?;
                Arc::new(AnthropicProvider::new(http_client, api_key))
            }
            ProviderKind::Google => {
                let api_key = Self::require_api_key(kind, config)?;
                Arc::new(GoogleProvider::new(http_client, api_key))
            }
            ProviderKind::Ollama => match config.ollama_base_url.as_deref() {
                Some(base_url) => Arc::new(OllamaProvider::with_base_url(http_client, base_url)),
                None => Arc::new(OllamaProvider::new(http_client)),
            },
        };

        debug!(provider = %kind, "LLM provider created");

        Ok(provider)
    }

    fn http_client(config: &ProviderConfig) -> Result<HttpClient, DomainError> {
        match config.timeout_secs {
            Some(secs) => HttpClient::with_timeout(Duration::from_secs(secs)),
            None => Ok(HttpClient::new()),
        }
    }

    fn require_api_key(kind: ProviderKind, config: &ProviderConfig) -> Result<String, DomainError> {
        config.api_key(kind).map(str::to_string).ok_or_else(|| {
            DomainError::credential(format!(
                "No API key configured for provider '{}' (set {})",
                kind,
                ProviderConfig::api_key_var(kind).unwrap_or("an API key")
            ))
        })
    }
}
