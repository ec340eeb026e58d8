//! Events pushed to the client over the event stream.

use crate::core::conversation::MessageId;

/// Kind of a client-facing event; the SSE `event:` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Status,
    Error,
    Message,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Status => "status",
            EventKind::Error => "error",
            EventKind::Message => "message",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient event; exists only on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub payload: String,
}

impl Event {
    pub fn new(kind: EventKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn status(text: impl Into<String>) -> Self {
        Self::new(EventKind::Status, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(EventKind::Error, text)
    }

    /// Partial-content event. The payload shape
    /// `message_id: <id>, content: <content>` is a client contract, plain text
    /// rather than JSON.
    pub fn message(id: &MessageId, content: &str) -> Self {
        Self::new(
            EventKind::Message,
            format!("message_id: {}, content: {}", id, content),
        )
    }

    /// Split a `message` payload back into `(message_id, content)`.
    pub fn message_parts(&self) -> Option<(&str, &str)> {
        if self.kind != EventKind::Message {
            return None;
        }
        let rest = self.payload.strip_prefix("message_id: ")?;
        rest.split_once(", content: ")
    }
}
