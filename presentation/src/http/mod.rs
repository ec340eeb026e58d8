//! HTTP surface

pub mod handler;
pub mod router;

pub use router::{AppState, router};
