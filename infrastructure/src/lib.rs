//! Infrastructure layer for zenbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileModelsConfig,
    FileOrchestrationConfig, FileProviderConfig, FileServerConfig, FileStreamingConfig, Severity,
};
pub use openai::{OpenAiError, OpenAiGenerationService};
