//! Structured output of an argument agent.

use serde::{Deserialize, Serialize};

/// Decoded output of one argument agent: `{"argument": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentResponse {
    pub argument: String,
}

impl ArgumentResponse {
    /// Decode an agent's raw text.
    ///
    /// Accepts the bare JSON object, or the object wrapped in a single
    /// Markdown code fence (` ```json ... ``` `). Anything else is a
    /// decode failure; there is no partial result.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fence(raw))
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}
