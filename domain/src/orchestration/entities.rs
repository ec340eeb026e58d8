//! Orchestration domain entities

/// Phase of one dilemma resolution.
///
/// ```text
/// Idle -> FanOutDispatched -> Joining -> Judging -> Complete
///                 \              |          |
///                  `----------> Errored <---'
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing dispatched yet
    Idle,
    /// Argument agents are running concurrently
    FanOutDispatched,
    /// Waiting for every agent to finish
    Joining,
    /// Judge call in flight
    Judging,
    /// Judge produced the final resolution
    Complete,
    /// Terminal failure
    Errored,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Idle => "idle",
            Phase::FanOutDispatched => "fan_out_dispatched",
            Phase::Joining => "joining",
            Phase::Judging => "judging",
            Phase::Complete => "complete",
            Phase::Errored => "errored",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Complete | Phase::Errored)
    }

    pub fn can_transition_to(&self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::FanOutDispatched)
                | (Phase::FanOutDispatched, Phase::Joining)
                | (Phase::FanOutDispatched, Phase::Errored)
                | (Phase::Joining, Phase::Judging)
                | (Phase::Joining, Phase::Errored)
                | (Phase::Judging, Phase::Complete)
                | (Phase::Judging, Phase::Errored)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
