//! Agent panel: the fan-out set plus the judge.

use super::role::Role;
use crate::core::error::DomainError;
use crate::prompt::{PromptTemplate, zen};
use std::collections::HashSet;

/// One argument agent in the fan-out set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub role: Role,
    /// Template with `{dilemma}` and `{history}` placeholders.
    pub prompt: PromptTemplate,
    /// Status text emitted when the agent is dispatched.
    pub status_label: String,
}

impl AgentConfig {
    pub fn new(role: Role, prompt: PromptTemplate, status_label: impl Into<String>) -> Self {
        Self {
            role,
            prompt,
            status_label: status_label.into(),
        }
    }
}

/// The judge that synthesizes every agent's argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeConfig {
    pub role: Role,
    /// Template with `{dilemma}`, `{history}` and one `{argument:<Role>}`
    /// placeholder per panel agent.
    pub prompt: PromptTemplate,
}

impl JudgeConfig {
    pub fn new(role: Role, prompt: PromptTemplate) -> Self {
        Self { role, prompt }
    }
}

/// Immutable panel configuration handed to the orchestrator.
///
/// Agent order is significant: arguments are joined by slot index, so
/// judge prompt substitution is reproducible whichever agent finishes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    agents: Vec<AgentConfig>,
    judge: JudgeConfig,
}

impl Panel {
    pub fn new(agents: Vec<AgentConfig>, judge: JudgeConfig) -> Result<Self, DomainError> {
        if agents.is_empty() {
            return Err(DomainError::EmptyPanel);
        }

        let mut seen = HashSet::new();
        for role in agents.iter().map(|a| &a.role).chain(std::iter::once(&judge.role)) {
            if !seen.insert(role) {
                return Err(DomainError::DuplicateRole(role.to_string()));
            }
        }

        if let Some(agent) = agents
            .iter()
            .find(|a| !judge.prompt.references(&PromptTemplate::argument_key(a.role.as_str())))
        {
            return Err(DomainError::UnreferencedArgument(agent.role.to_string()));
        }

        Ok(Self { agents, judge })
    }

    /// The default panel: Build Fast and Stillness argue, the Zen Judge decides.
    pub fn zen() -> Self {
        Self {
            agents: vec![
                AgentConfig::new(
                    Role::build_fast(),
                    PromptTemplate::new(zen::BUILD_FAST_PROMPT),
                    "Build Fast argues",
                ),
                AgentConfig::new(
                    Role::stillness(),
                    PromptTemplate::new(zen::STILLNESS_PROMPT),
                    "Stillness reflects",
                ),
            ],
            judge: JudgeConfig::new(Role::zen_judge(), PromptTemplate::new(zen::ZEN_JUDGE_PROMPT)),
        }
    }

    pub fn agents(&self) -> &[AgentConfig] {
        &self.agents
    }

    pub fn judge(&self) -> &JudgeConfig {
        &self.judge
    }

    /// Fan-out width.
    pub fn width(&self) -> usize {
        self.agents.len()
    }

    /// Every role the panel will ask a generation service for.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.agents
            .iter()
            .map(|a| &a.role)
            .chain(std::iter::once(&self.judge.role))
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::zen()
    }
}
