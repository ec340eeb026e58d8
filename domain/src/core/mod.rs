//! Core domain concepts shared across all subdomains.
//!
//! - [`dilemma::Dilemma`]: a validated dilemma to resolve
//! - [`conversation`]: conversation/message identifiers and history
//! - [`error::DomainError`]: domain-level errors

pub mod conversation;
pub mod dilemma;
pub mod error;
