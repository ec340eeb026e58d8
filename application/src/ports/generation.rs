//! Generation service port
//!
//! The capability boundary to the LLM provider: "generate text for a role
//! from a fully formatted prompt".

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use zenbot_domain::Role;

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no choices returned from provider")]
    EmptyResponse,

    #[error("No model configured for role {0}")]
    UnknownRole(Role),

    #[error("Generation cancelled")]
    Cancelled,
}

impl GenerationError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerationError::Cancelled)
    }
}

/// Text generation for a named role.
///
/// Implementations (adapters) live in the infrastructure layer. They must be
/// safe to share between concurrent requests, and must return promptly with
/// [`GenerationError::Cancelled`] once `cancel` fires instead of running the
/// provider call to completion.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate text for `role` from `prompt`.
    async fn generate(
        &self,
        cancel: &CancellationToken,
        role: &Role,
        prompt: &str,
    ) -> Result<String, GenerationError>;

    /// Whether `role` is mapped to a model. Checked once at startup.
    fn supports_role(&self, role: &Role) -> bool;
}
