//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod handle_dilemma;
pub mod resolve_dilemma;
pub mod stream_resolution;
