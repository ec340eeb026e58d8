//! Progressive streaming parameters.

use std::time::Duration;

/// Pacing for word-by-word delivery of the final resolution.
#[derive(Debug, Clone)]
pub struct StreamingParams {
    /// Pause between successive `message` events.
    pub word_delay: Duration,
}

impl Default for StreamingParams {
    fn default() -> Self {
        Self {
            word_delay: Duration::from_millis(150),
        }
    }
}

impl StreamingParams {
    pub fn from_delay_millis(millis: u64) -> Self {
        Self {
            word_delay: Duration::from_millis(millis),
        }
    }

    /// No pacing at all (tests).
    pub fn instant() -> Self {
        Self {
            word_delay: Duration::ZERO,
        }
    }
}
