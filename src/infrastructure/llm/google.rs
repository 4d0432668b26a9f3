use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::http_client::HttpClientTrait;
use crate::domain::{
    DomainError, FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage,
    split_system_messages,
};

const DEFAULT_GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini `generateContent` provider
#[derive(Debug)]
pub struct GoogleProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> GoogleProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GOOGLE_BASE_URL)
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

    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn build_request(&self, request: &LlmRequest) -> serde_json::Value {
        let (system, messages) = split_system_messages(&request.messages);

        let contents: Vec<GeminiContent> =
            messages.into_iter().map(GeminiContent::from_domain).collect();

        let mut body = serde_json::json!({ "contents": contents });

        if let Some(system_content) = system {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_content }]
            });
        }

        let mut generation_config = serde_json::Map::new();
        if let Some(temp) = request.temperature {
            generation_config.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(max_tokens) = request.max_tokens {
            generation_config.insert("maxOutputTokens".to_string(), serde_json::json!(max_tokens));
        }
        if request.wants_json() {
            generation_config.insert(
                "responseMimeType".to_string(),
                serde_json::json!("application/json"),
            );
        }
        if let Some(schema) = request.json_schema() {
            generation_config.insert("responseSchema".to_string(), to_gemini_schema(&schema.schema));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation_config);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, model: &str, json: serde_json::Value) -> Result<LlmResponse, DomainError> {
        let response: GeminiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("google", format!("Failed to parse response: {}", e))
        })?;

        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            DomainError::provider("google", format!("Empty response: {}", reason))
        })?;

        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let id = response
            .response_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let model = response.model_version.unwrap_or_else(|| model.to_string());

        let mut llm_response = LlmResponse::new(id, model, Message::assistant(content))
            .with_finish_reason(parse_finish_reason(candidate.finish_reason.as_deref()));

        if let Some(usage) = response.usage_metadata {
            llm_response = llm_response.with_usage(Usage::new(
                usage.prompt_token_count,
                usage.candidates_token_count,
            ));
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GoogleProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let url = self.generate_url(model);
        let body = self.build_request(&request);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(model, response)
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }
}

/// Rewrite a JSON schema into the OpenAPI subset Gemini accepts:
/// upper-case type names, `nullable` instead of a `null` type member,
/// and no `additionalProperties`.
fn to_gemini_schema(schema: &serde_json::Value) -> serde_json::Value {
    let Some(object) = schema.as_object() else {
        return schema.clone();
    };

    let mut converted = serde_json::Map::new();

    for (key, value) in object {
        match key.as_str() {
            "additionalProperties" => {}
            "type" => match value {
                serde_json::Value::String(t) => {
                    converted.insert("type".to_string(), serde_json::json!(t.to_uppercase()));
                }
                serde_json::Value::Array(types) => {
                    let mut nullable = false;
                    for t in types.iter().filter_map(|t| t.as_str()) {
                        if t == "null" {
                            nullable = true;
                        } else {
                            converted.insert("type".to_string(), serde_json::json!(t.to_uppercase()));
                        }
                    }
                    if nullable {
                        converted.insert("nullable".to_string(), serde_json::json!(true));
                    }
                }
                other => {
                    converted.insert("type".to_string(), other.clone());
                }
            },
            "properties" => {
                let properties = value
                    .as_object()
                    .map(|props| {
                        props
                            .iter()
                            .map(|(name, prop)| (name.clone(), to_gemini_schema(prop)))
                            .collect::<serde_json::Map<_, _>>()
                    })
                    .unwrap_or_default();
                converted.insert("properties".to_string(), serde_json::Value::Object(properties));
            }
            "items" => {
                converted.insert("items".to_string(), to_gemini_schema(value));
            }
            _ => {
                converted.insert(key.clone(), value.clone());
            }
        }
    }

    serde_json::Value::Object(converted)
}

fn parse_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
            FinishReason::ContentFilter
        }
        Some("OTHER") => FinishReason::Error,
        _ => FinishReason::Stop,
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::Assistant => "model",
            MessageRole::User | MessageRole::System => "user",
        };

        Self {
            role,
            parts: vec![GeminiPart {
                text: Some(message.content_text().to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
    model_version: Option<String>,
    response_id: Option<String>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}
