//! Domain layer for zenbot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Dilemma**: the user's question, validated non-empty
//! - **Panel**: argument agents that run concurrently, plus the judge that
//!   synthesizes their arguments
//! - **Event**: `status` / `error` / `message` items pushed to the client

pub mod agent;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod request;
pub mod stream;

// Re-export commonly used types
pub use agent::{
    argument::ArgumentResponse,
    panel::{AgentConfig, JudgeConfig, Panel},
    role::Role,
};
pub use core::{
    conversation::{ConversationHistory, ConversationId, MessageId},
    dilemma::Dilemma,
    error::DomainError,
};
pub use orchestration::entities::Phase;
pub use prompt::PromptTemplate;
pub use request::ZenbotRequest;
pub use stream::event::{Event, EventKind};
