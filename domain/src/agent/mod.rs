//! Agent domain
//!
//! Roles, the configured panel of argument agents plus judge, and the
//! structured output agents are expected to produce.

pub mod argument;
pub mod panel;
pub mod role;
