//! LLM provider implementations

mod anthropic;
mod factory;
mod google;
mod http_client;
mod ollama;
mod openai;
mod resolver;
mod structured;

pub use anthropic::AnthropicProvider;
pub use factory::LlmProviderFactory;
pub use google::GoogleProvider;
pub use http_client::{HttpClient, HttpClientTrait};
pub use ollama::{DEFAULT_OLLAMA_BASE_URL, OllamaProvider};
pub use openai::OpenAiProvider;
pub use resolver::{ConfigProviderResolver, ProviderResolver};
pub use structured::{StructuredClient, parse_structured_reply};

#[cfg(test)]
pub use resolver::mock::StaticProviderResolver;
