//! Chat-completion API client module
//!
//! Encapsulates the wire exchange with an OpenAI-style chat-completion
//! endpoint.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::errors::ActionError;

/// Fixed offset added to every estimate to absorb approximation loss.
pub const DEFAULT_APPROXIMATION_LOSS: usize = 3;

/// Rough token count used for limit checks: one token per five characters,
/// rounded up, plus a fixed approximation-loss offset. Monotonic
/// non-decreasing in the length of `text`.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    estimate_tokens_with_loss(text, DEFAULT_APPROXIMATION_LOSS)
}

#[must_use]
pub fn estimate_tokens_with_loss(text: &str, approximation_loss: usize) -> usize {
    text.chars().count().div_ceil(5) + approximation_loss
}

/// Speaker of a single chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Outbound request body. Always exactly two messages: the system
/// instruction first, the user prompt second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequestBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequestBody {
    #[must_use]
    pub fn new(model: &str, system_prompt: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt.to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

/// Result of one completed exchange with the endpoint.
#[derive(Debug)]
pub enum CompletionOutcome {
    /// `choices[0].message.content` of a successful response.
    Text(String),
    /// The endpoint answered with a non-success status. The error body has
    /// already been logged; callers decide what the user sees.
    ApiFailure { status: StatusCode },
}

/// Chat-completion API client for a single request/response exchange.
pub struct ChatClient {
    http: Client,
}

impl ChatClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Issues one `POST` to `url` with a bearer `api_key` and the given
    /// body, and classifies the response.
    ///
    /// The response body is decoded as JSON before the status is checked;
    /// a non-JSON body fails the invocation on every status. No retries,
    /// no timeout beyond the client default.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the body is not
    /// JSON, or a success response lacks `choices[0].message.content`.
    pub async fn chat_completion(
        &self,
        url: &str,
        api_key: &str,
        body: &ChatRequestBody,
    ) -> Result<CompletionOutcome, ActionError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ActionError::Http(format!("chat completion request failed: {e}")))?;

        let status = response.status();

        // Decoded before the status check; error bodies are parsed and
        // then only logged.
        let raw: Value = response
            .json()
            .await
            .map_err(|e| ActionError::MalformedResponse(format!("body is not JSON: {e}")))?;

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                status_text = status.canonical_reason().unwrap_or("unknown"),
                body = %raw,
                "chat completion endpoint returned an error, check the action configuration for typos"
            );
            return Ok(CompletionOutcome::ApiFailure { status });
        }

        let converted: ChatResponse = serde_json::from_value(raw)
            .map_err(|e| ActionError::MalformedResponse(format!("unexpected shape: {e}")))?;

        let content = converted
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ActionError::MalformedResponse("response contained no choices".to_string())
            })?;

        Ok(CompletionOutcome::Text(content))
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}
