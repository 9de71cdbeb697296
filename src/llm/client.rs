//! HTTP client for the Anthropic Messages API.
//!
//! One call per request, no retry policy: every failure propagates to the
//! caller and ends up on the error page. `complete` is the call both agents
//! make; it unwraps the response down to the completion text, and unwraps
//! API error bodies down to their human-readable message.

use reqwest::Client;
use serde::Deserialize;

use super::types::{MessagesRequest, MessagesResponse};

/// Errors from LLM operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("model returned no text content")]
    EmptyCompletion,

    #[error("missing API key: {0}")]
    MissingApiKey(String),
}

/// Client for the Anthropic Messages API.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
    base_url: String,
    api_version: String,
}

impl LlmClient {
    /// Create a client with the default base URL (https://api.anthropic.com).
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://api.anthropic.com".into())
    }

    /// Create a client with a custom base URL (for testing with mock servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
            api_version: "2023-06-01".into(),
        }
    }

    /// Create a client reading ANTHROPIC_API_KEY from the environment.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            LlmError::MissingApiKey("ANTHROPIC_API_KEY environment variable not set".into())
        })?;
        Ok(Self::new(api_key))
    }

    /// Send a request and return the completion text.
    ///
    /// This is the whole agent contract at the wire level: one conversation
    /// in, one text block out. A response without a text block is an
    /// `EmptyCompletion` error.
    pub async fn complete(&self, request: &MessagesRequest) -> Result<String, LlmError> {
        let response = self.messages(request).await?;
        completion_text(&response)
    }

    /// Send a messages request and return the full API response.
    pub async fn messages(&self, request: &MessagesRequest) -> Result<MessagesResponse, LlmError> {
        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))
    }
}

/// First text block of a response, or `EmptyCompletion`.
pub fn completion_text(response: &MessagesResponse) -> Result<String, LlmError> {
    response
        .text()
        .map(str::to_string)
        .ok_or(LlmError::EmptyCompletion)
}

/// The API wraps errors in `{"type":"error","error":{"type":...,"message":...}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pull the human-readable message out of an API error body, falling back
/// to the raw body when it is not the documented envelope.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: Some(detail) }) => detail.message,
        _ if body.is_empty() => "(no body)".into(),
        _ => body.to_string(),
    }
}
