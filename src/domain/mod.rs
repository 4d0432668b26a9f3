//! Domain layer - Core types of the translation flow

pub mod error;
pub mod llm;
pub mod translation;

pub use error::DomainError;
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    ProviderKind, Usage, split_system_messages,
};
pub use translation::{
    CANNOT_PROCESS_EXPLANATION, FormOptions, TranslationPrompt, TranslationRequest,
    TranslationResponse, format_prompt,
};
