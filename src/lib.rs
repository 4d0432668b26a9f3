//! sqlswap
//!
//! Translates SQL queries between database engines by asking an LLM for a
//! structured `{query, explanation}` answer. Supports OpenAI, Anthropic,
//! Google Gemini and Ollama, from the command line or a small web form.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{AppConfig, ProviderConfig};
pub use domain::{DomainError, TranslationRequest, TranslationResponse, format_prompt};
pub use infrastructure::llm::StructuredClient;
pub use infrastructure::services::TranslationService;
pub use infrastructure::sql::{statement_count, validate_syntax};
