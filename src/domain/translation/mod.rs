//! Query translation domain: prompt formatting and the structured reply

mod model;
pub mod options;
mod prompt;
mod template;

pub use model::{TranslationRequest, TranslationResponse};
pub use options::FormOptions;
pub use prompt::{CANNOT_PROCESS_EXPLANATION, TranslationPrompt, format_prompt};
pub use template::MessageTemplate;
