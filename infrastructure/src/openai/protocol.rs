//! Wire types for the `/chat/completions` endpoint.
//!
//! Only the fields zenbot reads or writes are modelled; everything else in
//! the provider's response is ignored.

use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<RequestMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// A request whose single message is `prompt` in the system role.
    pub fn system(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![RequestMessage {
                role: "system",
                content: prompt,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any choice was returned.
    ///
    /// A choice with a null content counts as empty text.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error response body: `{"error": {"message": "...", ...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Best human-readable message for a non-2xx body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "empty error body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
