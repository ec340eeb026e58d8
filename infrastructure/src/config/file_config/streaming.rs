//! Streaming configuration from TOML (`[streaming]` section)

use serde::{Deserialize, Serialize};
use zenbot_application::StreamingParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStreamingConfig {
    /// Pause between progressive `message` events, in milliseconds.
    pub word_delay_ms: u64,
}

impl Default for FileStreamingConfig {
    fn default() -> Self {
        Self { word_delay_ms: 150 }
    }
}

impl FileStreamingConfig {
    pub fn to_params(&self) -> StreamingParams {
        StreamingParams::from_delay_millis(self.word_delay_ms)
    }
}
