//! Error types for building the OpenAI adapter

use thiserror::Error;

/// Errors raised while constructing [`super::OpenAiGenerationService`].
///
/// Request-time failures are reported as `GenerationError` instead.
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("no API key found: set {env} or provider.api_key")]
    MissingApiKey { env: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
