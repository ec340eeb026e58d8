//! Progressive streaming of a final resolution.
//!
//! The judge answers in one piece; the client still sees it "typed out"
//! word by word. Every `message` event carries the full prefix so far, all
//! under one message id.

use crate::config::StreamingParams;
use crate::ports::event_sink::EventSink;
use tracing::debug;
use zenbot_domain::{Event, MessageId};

/// Emits growing-prefix `message` events for a finished text
#[derive(Debug, Clone, Default)]
pub struct ProgressiveStreamer {
    params: StreamingParams,
}

impl ProgressiveStreamer {
    pub fn new(params: StreamingParams) -> Self {
        Self { params }
    }

    /// Stream `text` under a fresh time-derived message id.
    ///
    /// Returns the id used and the number of events emitted.
    pub async fn stream(&self, sink: &dyn EventSink, text: &str) -> (MessageId, usize) {
        let id = MessageId::from_unix_seconds(chrono::Utc::now().timestamp());
        let emitted = self.stream_with_id(sink, &id, text).await;
        (id, emitted)
    }

    /// Stream `text` under `id`.
    ///
    /// Tokens are split on any whitespace and re-joined with single spaces.
    /// There is no early exit: every token is delivered.
    pub async fn stream_with_id(&self, sink: &dyn EventSink, id: &MessageId, text: &str) -> usize {
        let mut content = String::with_capacity(text.len());
        let mut emitted = 0;

        for word in text.split_whitespace() {
            if emitted > 0 {
                content.push(' ');
                if !self.params.word_delay.is_zero() {
                    tokio::time::sleep(self.params.word_delay).await;
                }
            }
            content.push_str(word);
            sink.emit(Event::message(id, &content));
            emitted += 1;
        }

        debug!("Streamed message {} in {} events", id, emitted);
        emitted
    }
}
