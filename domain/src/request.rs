//! Inbound request body

use crate::core::conversation::ConversationId;
use serde::{Deserialize, Serialize};

/// Body of `POST /zenbot`.
///
/// `message` is validated separately (see [`crate::Dilemma`]) so that an
/// empty message is reported in-band rather than as a decode failure. A
/// missing or `null` message decodes to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZenbotRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub conversation_id: Option<ConversationId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl ZenbotRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            conversation_id: None,
            message: message.into(),
        }
    }

    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(ConversationId::new(id));
        self
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<ConversationId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(ConversationId::new))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
