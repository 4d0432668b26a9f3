//! Prompt formatting for dialect translation

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::template::MessageTemplate;
use crate::domain::llm::Message;

/// Explanation the model is told to give when it cannot translate
pub const CANNOT_PROCESS_EXPLANATION: &str = "I can't process this query!";

const SYSTEM_TEMPLATE: &str = r#"
You are an expert SQL analyst specializing in ${var:source-engine} and ${var:target-engine}.

Your task is to:
Accurately translate an SQL query written for ${var:source-engine} into a functional and optimized version for ${var:target-engine}.

Your Objectives:
1. Adapt the syntax, data types, and functions to match ${var:target-engine}'s requirements.
2. Provide a brief explanation of the key differences after the translation.
3. The response should be in JSON format with two keys:
    - `query` → The translated SQL query for ${var:target-engine}
    - `explanation` → A clear explanation of the changes made during the translation
4. IF YOU DON'T KNOW, ANSWER WITH : `query` = null, `explanation` = "I can't process this query!"
"#;

const HUMAN_TEMPLATE: &str = r#"
Can you translate this ${var:source-engine} query to ${var:target-engine}?
${var:query}
"#;

static SYSTEM_MESSAGE: Lazy<MessageTemplate> = Lazy::new(|| MessageTemplate::new(SYSTEM_TEMPLATE));
static HUMAN_MESSAGE: Lazy<MessageTemplate> = Lazy::new(|| MessageTemplate::new(HUMAN_TEMPLATE));

/// The two rendered messages of a translation exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPrompt {
    pub system: String,
    pub human: String,
}

impl TranslationPrompt {
    pub fn into_messages(self) -> Vec<Message> {
        vec![Message::system(self.system), Message::user(self.human)]
    }
}

/// Fill the system and human templates. Inputs are substituted verbatim.
pub fn format_prompt(source_engine: &str, target_engine: &str, query: &str) -> TranslationPrompt {
    let values = HashMap::from([
        ("source-engine", source_engine),
        ("target-engine", target_engine),
        ("query", query),
    ]);

    TranslationPrompt {
        system: SYSTEM_MESSAGE.render(&values),
        human: HUMAN_MESSAGE.render(&values),
    }
}
