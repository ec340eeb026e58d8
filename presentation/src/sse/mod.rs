//! Server-sent event transport

pub mod emitter;
pub mod frame;

pub use emitter::SseEmitter;
