//! Orchestration domain
//!
//! The phase state machine of one dilemma resolution.

pub mod entities;
