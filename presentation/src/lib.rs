//! Presentation layer for zenbot
//!
//! This crate exposes the dilemma use case to the outside world: the
//! `axum` router, the `/zenbot` handler, server-sent event encoding and
//! the command-line arguments of the server binary.

pub mod cli;
pub mod http;
pub mod sse;

pub use cli::commands::Cli;
pub use http::{AppState, router};
pub use sse::SseEmitter;
