//! `EventSink` over a streaming HTTP response body.

use super::frame;
use axum::body::Bytes;
use tokio::sync::mpsc;
use tracing::debug;
use zenbot_application::EventSink;
use zenbot_domain::Event;

/// Writes encoded frames into the channel backing one response body.
///
/// Each `emit` hands a complete frame to the body immediately; nothing is
/// buffered across calls. Once the client is gone, frames are dropped.
#[derive(Clone)]
pub struct SseEmitter {
    tx: mpsc::UnboundedSender<Bytes>,
}

impl SseEmitter {
    /// An emitter and the receiving end that feeds the response body.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Resolves once the response body has been dropped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl EventSink for SseEmitter {
    fn emit(&self, event: Event) {
        if self.tx.send(Bytes::from(frame::encode(&event))).is_err() {
            debug!(kind = %event.kind, "Client gone, dropping event");
        }
    }
}
