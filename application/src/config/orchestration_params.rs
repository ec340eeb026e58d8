//! Orchestration parameters.

use std::time::Duration;

/// Controls the lifetime of one dilemma resolution.
///
/// By default there is no deadline: a resolution lives exactly as long as
/// the client connection. A deadline bounds fan-out and judge together.
#[derive(Debug, Clone, Default)]
pub struct OrchestrationParams {
    /// Upper bound on the whole orchestration (fan-out, join and judge).
    pub deadline: Option<Duration>,
}

impl OrchestrationParams {
    /// Creates params from an optional deadline in seconds.
    ///
    /// If `seconds` is `None`, no deadline is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            deadline: seconds.map(Duration::from_secs),
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
