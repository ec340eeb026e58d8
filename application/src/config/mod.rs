//! Application-level configuration.
//!
//! Runtime parameters that control how use cases behave:
//!
//! - [`OrchestrationParams`]: optional deadline over one resolution
//! - [`StreamingParams`]: pacing of progressive message delivery

pub mod orchestration_params;
pub mod streaming_params;

pub use orchestration_params::OrchestrationParams;
pub use streaming_params::StreamingParams;
