//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("empty message provided")]
    EmptyDilemma,

    #[error("Panel must contain at least one agent")]
    EmptyPanel,

    #[error("Duplicate agent role in panel: {0}")]
    DuplicateRole(String),

    #[error("Judge prompt does not reference the argument of {0}")]
    UnreferencedArgument(String),

    #[error("Invalid role name: {0:?}")]
    InvalidRole(String),
}
