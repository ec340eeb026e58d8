//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application parameters
//! where appropriate.

mod models;
mod orchestration;
mod provider;
mod server;
mod streaming;

pub use models::FileModelsConfig;
pub use orchestration::FileOrchestrationConfig;
pub use provider::FileProviderConfig;
pub use server::FileServerConfig;
pub use streaming::FileStreamingConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener
    pub server: FileServerConfig,
    /// LLM provider endpoint and credential
    pub provider: FileProviderConfig,
    /// Role → model mapping
    pub models: FileModelsConfig,
    /// Progressive streaming pacing
    pub streaming: FileStreamingConfig,
    /// Resolution deadline
    pub orchestration: FileOrchestrationConfig,
}

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found while validating the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `models.ZenJudge`.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// The credential is not checked here; it is resolved (and its absence
    /// reported) when the provider adapter is built.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.models.validate();

        if self.server.port == 0 {
            issues.push(ConfigIssue::warning(
                "server.port",
                "port 0 binds an ephemeral port",
            ));
        }

        let base_url = self.provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                "provider.base_url",
                format!("expected an http(s) URL, got {:?}", base_url),
            ));
        }

        if self.orchestration.request_timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                "orchestration.request_timeout_secs",
                "timeout must be greater than zero",
            ));
        }

        issues
    }
}
