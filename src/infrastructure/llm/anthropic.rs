use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http_client::HttpClientTrait;
use crate::domain::{
    DomainError, FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage,
    split_system_messages,
};

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Appended to the system prompt since the messages API has no JSON mode
const JSON_ONLY_INSTRUCTION: &str =
    "Respond with a single JSON object only, without any text before or after it.";

/// Anthropic messages API provider
#[derive(Debug)]
pub struct AnthropicProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> AnthropicProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_ANTHROPIC_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key: api_key.into(),
            base_url,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn build_request(&self, model: &str, request: &LlmRequest) -> serde_json::Value {
        let (mut system, messages) = split_system_messages(&request.messages);

        if request.wants_json() {
            system = Some(match system {
                Some(text) => format!("{}\n{}", text, JSON_ONLY_INSTRUCTION),
                None => JSON_ONLY_INSTRUCTION.to_string(),
            });
        }

        let anthropic_messages: Vec<AnthropicMessage> = messages
            .into_iter()
            .map(AnthropicMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": model,
            "messages": anthropic_messages,
            "max_tokens": request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        });

        if let Some(system_content) = system {
            body["system"] = serde_json::json!(system_content);
        }

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-api-key", self.api_key.as_str()),
            ("anthropic-version", ANTHROPIC_VERSION),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<LlmResponse, DomainError> {
        let response: AnthropicResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("anthropic", format!("Failed to parse response: {}", e))
        })?;

        let content = response
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");

        let message = Message::assistant(content);

        Ok(LlmResponse::new(response.id, response.model, message)
            .with_finish_reason(parse_stop_reason(response.stop_reason.as_deref()))
            .with_usage(Usage::new(
                response.usage.input_tokens,
                response.usage.output_tokens,
            )))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for AnthropicProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let url = self.messages_url();
        let body = self.build_request(model, &request);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}

fn parse_stop_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("max_tokens") => FinishReason::Length,
        Some("refusal") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// Anthropic API types

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

impl AnthropicMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::Assistant => "assistant",
            MessageRole::User | MessageRole::System => "user",
        };

        Self {
            role,
            content: message.content_text().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    id: String,
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::LlmResponseFormat;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;
    use std::sync::Arc;

    const TEST_URL: &str = "https://api.anthropic.com/v1/messages";

    fn message_response(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_123",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-7-sonnet-latest",
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 12, "output_tokens": 10 }
        })
    }

    #[tokio::test]
    async fn test_anthropic_chat() {
        let client = MockHttpClient::new().with_response(TEST_URL, message_response("Hello!"));
        let provider = AnthropicProvider::new(client, "test-api-key");

        let request = LlmRequest::builder()
            .system("You are helpful")
            .user("Hello!")
            .build();

        let response = provider
            .chat("claude-3-7-sonnet-latest", request)
            .await
            .unwrap();

        assert_eq!(response.id, "msg_123");
        assert_eq!(response.content(), "Hello!");
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.unwrap().total_tokens, 22);
    }

    #[tokio::test]
    async fn test_anthropic_moves_system_out_of_messages() {
        let client = Arc::new(MockHttpClient::new().with_response(TEST_URL, message_response("{}")));
        let provider = AnthropicProvider::new(client.clone(), "test-key");

        let request = LlmRequest::builder()
            .system("System prompt")
            .user("Hello")
            .response_format(LlmResponseFormat::JsonObject)
            .build();
        provider.chat("claude-3-7-sonnet-latest", request).await.unwrap();

        let body = client.last_body().unwrap();
        let system = body["system"].as_str().unwrap();
        assert!(system.starts_with("System prompt"));
        assert!(system.ends_with(JSON_ONLY_INSTRUCTION));
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["max_tokens"], DEFAULT_MAX_TOKENS);
        assert_eq!(client.last_header("x-api-key").as_deref(), Some("test-key"));
    }

    #[tokio::test]
    async fn test_anthropic_joins_text_blocks() {
        let response = serde_json::json!({
            "id": "msg_1",
            "model": "claude-3-5-sonnet-latest",
            "content": [
                { "type": "text", "text": "{\"query\": " },
                { "type": "text", "text": "null}" }
            ],
            "stop_reason": "max_tokens",
            "usage": { "input_tokens": 1, "output_tokens": 1 }
        });
        let client = MockHttpClient::new().with_response(TEST_URL, response);
        let provider = AnthropicProvider::new(client, "test-key");

        let response = provider
            .chat("claude-3-5-sonnet-latest", LlmRequest::builder().user("x").build())
            .await
            .unwrap();

        assert_eq!(response.content(), "{\"query\": null}");
        assert_eq!(response.finish_reason, Some(FinishReason::Length));
    }

    #[tokio::test]
    async fn test_anthropic_custom_base_url() {
        let custom_url = "http://localhost:8081/v1/messages";
        let client = MockHttpClient::new().with_response(custom_url, message_response("ok"));
        let provider = AnthropicProvider::with_base_url(client, "test-key", "http://localhost:8081");

        let response = provider
            .chat("claude-3-5-sonnet-latest", LlmRequest::builder().user("Test").build())
            .await
            .unwrap();

        assert_eq!(response.id, "msg_123");
    }
}
