//! Application layer for zenbot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{OrchestrationParams, StreamingParams};
pub use ports::{
    event_sink::{EventSink, NoEvents},
    generation::{GenerationError, GenerationService},
};
pub use use_cases::handle_dilemma::{
    HandleDilemmaError, HandleDilemmaOutput, HandleDilemmaUseCase,
};
pub use use_cases::resolve_dilemma::{
    ResolveDilemmaInput, ResolveDilemmaOutput, ResolveDilemmaUseCase, ResolveError,
};
pub use use_cases::stream_resolution::ProgressiveStreamer;
