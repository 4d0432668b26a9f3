use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The LLM backends a translation can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Ollama,
    Google,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Ollama,
        ProviderKind::Google,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Ollama => "ollama",
            ProviderKind::Google => "google",
        }
    }

    /// Whether the provider needs an API key
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, ProviderKind::Ollama)
    }

    /// Infer the provider from a model name; unknown families run on Ollama.
    pub fn for_model(model: &str) -> Self {
        let model = model.trim().to_ascii_lowercase();

        if model.starts_with("gpt-") || model.starts_with("o1") || model.starts_with("o3") {
            ProviderKind::OpenAi
        } else if model.starts_with("claude-") {
            ProviderKind::Anthropic
        } else if model.starts_with("gemini-") {
            ProviderKind::Google
        } else {
            ProviderKind::Ollama
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "ollama" => Ok(ProviderKind::Ollama),
            "google" => Ok(ProviderKind::Google),
            other => Err(DomainError::configuration(format!(
                "Invalid LLM provider: '{}' (expected one of: openai, anthropic, ollama, google)",
                other
            ))),
        }
    }
}
