//! Event sink port
//!
//! Where orchestration and streaming push client-facing events.

use zenbot_domain::Event;

/// Receives events destined for the client.
///
/// `emit` is fire-and-forget: each event is handed to the transport
/// immediately, and a transport that has gone away swallows it. Emitting
/// never fails the caller. Implementations must tolerate concurrent calls
/// from fan-out tasks.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);

    fn status(&self, text: &str) {
        self.emit(Event::status(text));
    }

    fn error(&self, text: &str) {
        self.emit(Event::error(text));
    }
}

/// Sink that discards every event
pub struct NoEvents;

impl EventSink for NoEvents {
    fn emit(&self, _event: Event) {}
}
