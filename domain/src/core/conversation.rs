//! Conversation identifiers and history

use serde::{Deserialize, Serialize};

/// Identifier carried through a request for future conversation threading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Time-derived id used when the client did not supply one.
    pub fn from_unix_seconds(secs: i64) -> Self {
        Self(format!("conv-{}", secs))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier shared by every `message` event of one streamed resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_unix_seconds(secs: i64) -> Self {
        Self(format!("zenbot-{}", secs))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recent conversation turns rendered into prompts as a JSON array.
///
/// Turns are not persisted between requests, so in practice this is
/// always empty; the rendering still follows the prompt contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<String>,
}

impl ConversationHistory {
    /// Maximum number of turns rendered into a prompt.
    pub const MAX_TURNS: usize = 3;

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_turns(turns: Vec<String>) -> Self {
        Self { turns }
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the most recent turns as a JSON array string.
    pub fn render(&self) -> String {
        let start = self.turns.len().saturating_sub(Self::MAX_TURNS);
        serde_json::Value::from(&self.turns[start..]).to_string()
    }
}
