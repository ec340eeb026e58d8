//! Prompt domain
//!
//! Templates and the built-in prompt texts for the zen panel.

mod template;
pub mod zen;

pub use template::PromptTemplate;
