/// LLM Client — the single point of entry for chat-completion calls in the relay.
///
/// Handlers only see the `CompletionClient` trait; `OpenAiClient` is the
/// production backend speaking the OpenAI Chat Completions wire format.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Model used by the plain prompt endpoint.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion service returned no choices")]
    NoChoices,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// One generated completion, returned to callers as the service reported it.
/// Fields not modelled here (`logprobs`, vendor extensions) ride along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Sends an ordered list of messages to a model and returns its first choice.
///
/// Carried in `AppState` as `Arc<dyn CompletionClient>`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
    ) -> Result<Choice, CompletionError>;
}

/// Chat Completions client. One outbound call per request: no retry, no cache.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, CompletionError> {
        Ok(Self {
            client: Client::builder().user_agent("relay").build()?,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
    ) -> Result<Choice, CompletionError> {
        let request_body = ChatCompletionRequest {
            model,
            messages: &messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Completion succeeded: model={model}, prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        first_choice(parsed)
    }
}

fn first_choice(response: ChatCompletionResponse) -> Result<Choice, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::NoChoices)
}

/// Pulls `error.message` out of an upstream error body, falling back to the raw body.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}
