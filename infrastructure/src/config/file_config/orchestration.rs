//! Orchestration configuration from TOML (`[orchestration]` section)

use serde::{Deserialize, Serialize};
use zenbot_application::OrchestrationParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestrationConfig {
    /// Optional deadline for one resolution, in seconds. Unset means the
    /// resolution lives as long as the client connection.
    pub request_timeout_secs: Option<u64>,
}

impl FileOrchestrationConfig {
    pub fn to_params(&self) -> OrchestrationParams {
        OrchestrationParams::from_timeout_seconds(self.request_timeout_secs)
    }
}
