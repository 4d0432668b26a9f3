use serde::Deserialize;

use crate::domain::{DomainError, ProviderKind};

/// Environment variables read into [`ProviderConfig`]
pub const PROVIDER_ENV_VARS: [&str; 7] = [
    "LLM_PROVIDER",
    "LLM_MODEL",
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "GOOGLE_API_KEY",
    "OLLAMA_BASE_URL",
    "LLM_TIMEOUT_SECS",
];

/// Provider selection and credentials, read from the process environment.
///
/// Loaded once at startup and treated as read-only afterwards. Empty values
/// count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(rename = "llm_provider")]
    pub provider: Option<String>,
    #[serde(rename = "llm_model")]
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub ollama_base_url: Option<String>,
    #[serde(rename = "llm_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Load from the environment. `.env` files are picked up by the caller
    /// through dotenvy before this runs.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit set of variables; unrelated names are ignored
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let source: config::Map<String, String> = vars
            .into_iter()
            .filter(|(key, _)| PROVIDER_ENV_VARS.contains(&key.as_ref()))
            .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().trim().to_string()))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        let config = config::Config::builder()
            .add_source(config::Environment::default().source(Some(source)))
            .build()
            .map_err(|e| DomainError::configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DomainError::configuration(format!("Invalid provider settings: {}", e)))
    }

    /// API key configured for `kind`, if that provider takes one
    pub fn api_key(&self, kind: ProviderKind) -> Option<&str> {
        let key = match kind {
            ProviderKind::OpenAi => self.openai_api_key.as_deref(),
            ProviderKind::Anthropic => self.anthropic_api_key.as_deref(),
            ProviderKind::Google => self.google_api_key.as_deref(),
            ProviderKind::Ollama => None,
        };

        key.filter(|k| !k.trim().is_empty())
    }

    /// Name of the variable holding the API key for `kind`
    pub fn api_key_var(kind: ProviderKind) -> Option<&'static str> {
        match kind {
            ProviderKind::OpenAi => Some("OPENAI_API_KEY"),
            ProviderKind::Anthropic => Some("ANTHROPIC_API_KEY"),
            ProviderKind::Google => Some("GOOGLE_API_KEY"),
            ProviderKind::Ollama => None,
        }
    }
}
