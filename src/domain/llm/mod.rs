//! LLM provider domain models and traits

mod message;
mod provider;
mod provider_kind;
mod request;
mod response;

pub use message::{Message, MessageRole, split_system_messages};
pub use provider::LlmProvider;
pub use provider_kind::ProviderKind;
pub use request::{LlmJsonSchema, LlmRequest, LlmRequestBuilder, LlmResponseFormat};
pub use response::{FinishReason, LlmResponse, Usage};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
