//! OpenAI-compatible chat completions adapter
//!
//! Implements the `GenerationService` port over HTTP. Every role is a plain
//! chat completion whose only message is the formatted prompt, sent as the
//! system message to the model mapped for that role.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::OpenAiGenerationService;
pub use error::OpenAiError;
