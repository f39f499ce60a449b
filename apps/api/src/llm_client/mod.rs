/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the model API directly.
/// Everything goes through the `ChatModel` trait so handlers and the roadmap
/// engine never see HTTP, and tests can swap in a canned model.
///
/// Backend: Groq's OpenAI-compatible chat completions endpoint.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::chat::{ChatTurn, Role};

#[cfg(test)]
pub mod testing;

const TEMPERATURE: f32 = 0.7;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Reply text used when no API key is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Groq API key not configured. Please set GROQ_API_KEY in .env.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Whether the model is asked for free text or a single JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    JsonObject,
}

/// A message as sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

impl From<&ChatTurn> for Message {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

/// The chat model seam. `AppState` carries an `Arc<dyn ChatModel>`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        format: ResponseFormat,
    ) -> Result<String, LlmError>;

    /// Like `complete`, but every failure becomes user-facing text.
    ///
    /// Callers that parse the reply (roadmap recovery) treat the failure text as
    /// just another unparseable response.
    async fn complete_or_sentinel(&self, messages: &[Message], format: ResponseFormat) -> String {
        match self.complete(messages, format).await {
            Ok(text) => text,
            Err(LlmError::NotConfigured) => NOT_CONFIGURED_MESSAGE.to_string(),
            Err(e) => {
                warn!("Chat completion failed: {e}");
                format!("Error calling Groq API: {e}")
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatBody>,
}

#[derive(Debug, Serialize)]
struct ResponseFormatBody {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(model: &'a str, messages: &'a [Message], format: ResponseFormat) -> Self {
        Self {
            model,
            messages,
            temperature: TEMPERATURE,
            response_format: match format {
                ResponseFormat::Text => None,
                ResponseFormat::JsonObject => Some(ResponseFormatBody {
                    kind: "json_object",
                }),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the chat completions API, with retry on 429 and 5xx.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, model: String, api_url: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
            api_url,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a raw call, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        messages: &[Message],
        format: ResponseFormat,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let request_body = ChatCompletionRequest::new(&self.model, messages, format);

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: ChatCompletionResponse = response.json().await?;

            if let Some(usage) = &completion.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return Ok(completion);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn complete(
        &self,
        messages: &[Message],
        format: ResponseFormat,
    ) -> Result<String, LlmError> {
        let completion = self.call(messages, format).await?;
        completion
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> LlmClient {
        LlmClient::new(
            None,
            "llama-3.1-8b-instant".to_string(),
            "http://127.0.0.1:9/never-called".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_json_request_carries_response_format() {
        let messages = vec![Message::system("sys"), Message::user("hi")];
        let body = ChatCompletionRequest::new("m", &messages, ResponseFormat::JsonObject);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_text_request_omits_response_format() {
        let messages = vec![Message::user("hi")];
        let body = ChatCompletionRequest::new("m", &messages, ResponseFormat::Text);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("response_format").is_none());
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_reads_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("first"));
        assert_eq!(response.usage.unwrap().completion_tokens, 3);
    }

    #[test]
    fn test_response_without_choices_has_no_text() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_message_from_turn_keeps_role() {
        let turn = ChatTurn::assistant("hello");
        let message = Message::from(&turn);
        assert_eq!(message, Message::assistant("hello"));
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = unconfigured();
        assert!(!client.is_configured());
        let result = client.complete(&[Message::user("hi")], ResponseFormat::Text).await;
        assert!(matches!(result, Err(LlmError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_unconfigured_client_sentinel_text() {
        let client = unconfigured();
        let text = client
            .complete_or_sentinel(&[Message::user("hi")], ResponseFormat::JsonObject)
            .await;
        assert_eq!(text, NOT_CONFIGURED_MESSAGE);
    }
}
