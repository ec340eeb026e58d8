//! Resolve Dilemma use case
//!
//! Fans the dilemma out to every argument agent of the [`Panel`]
//! concurrently, joins all of them, then asks the judge to synthesize the
//! arguments into one resolution.

use crate::config::OrchestrationParams;
use crate::ports::event_sink::EventSink;
use crate::ports::generation::{GenerationError, GenerationService};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use zenbot_domain::{
    ArgumentResponse, ConversationHistory, Dilemma, Panel, Phase, PromptTemplate, Role,
};

/// Errors that terminate a resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{role} error: {source}")]
    Agent {
        role: Role,
        #[source]
        source: GenerationError,
    },

    #[error("failed to parse {role} response: {source}")]
    Decode {
        role: Role,
        #[source]
        source: serde_json::Error,
    },

    #[error("{role} error: {source}")]
    Judge {
        role: Role,
        #[source]
        source: GenerationError,
    },

    #[error("{0} returned an empty resolution")]
    EmptyResolution(Role),

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out after {}s", .0.as_secs())]
    TimedOut(Duration),

    #[error("internal error: no model configured for role {0}")]
    UnknownRole(Role),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResolveError {
    fn agent(role: &Role, source: GenerationError) -> Self {
        match source {
            GenerationError::Cancelled => ResolveError::Cancelled,
            GenerationError::UnknownRole(role) => ResolveError::UnknownRole(role),
            source => ResolveError::Agent {
                role: role.clone(),
                source,
            },
        }
    }

    fn judge(role: &Role, source: GenerationError) -> Self {
        match source {
            GenerationError::Cancelled => ResolveError::Cancelled,
            GenerationError::UnknownRole(role) => ResolveError::UnknownRole(role),
            source => ResolveError::Judge {
                role: role.clone(),
                source,
            },
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ResolveError::Cancelled)
    }

    /// Programming or configuration faults, never caused by client input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ResolveError::UnknownRole(_) | ResolveError::Internal(_))
    }
}

/// Input for the ResolveDilemma use case
#[derive(Debug, Clone)]
pub struct ResolveDilemmaInput {
    pub dilemma: Dilemma,
    pub history: ConversationHistory,
}

impl ResolveDilemmaInput {
    pub fn new(dilemma: Dilemma) -> Self {
        Self {
            dilemma,
            history: ConversationHistory::empty(),
        }
    }

    pub fn with_history(mut self, history: ConversationHistory) -> Self {
        self.history = history;
        self
    }
}

/// Result of a successful resolution
#[derive(Debug, Clone)]
pub struct ResolveDilemmaOutput {
    /// Arguments in panel slot order.
    pub arguments: Vec<(Role, String)>,
    /// The judge's raw text, unparsed.
    pub resolution: String,
}

/// Use case coordinating the argument agents and the judge
pub struct ResolveDilemmaUseCase<G: GenerationService + ?Sized + 'static> {
    generator: Arc<G>,
    panel: Arc<Panel>,
    params: OrchestrationParams,
}

impl<G: GenerationService + ?Sized + 'static> ResolveDilemmaUseCase<G> {
    pub fn new(generator: Arc<G>, panel: Arc<Panel>) -> Self {
        Self {
            generator,
            panel,
            params: OrchestrationParams::default(),
        }
    }

    pub fn with_params(mut self, params: OrchestrationParams) -> Self {
        self.params = params;
        self
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Execute the use case.
    ///
    /// Status events are emitted to `sink` at every phase transition.
    /// Errors are returned, not emitted; reporting them is the caller's job.
    pub async fn execute(
        &self,
        input: ResolveDilemmaInput,
        sink: Arc<dyn EventSink>,
        cancel: &CancellationToken,
    ) -> Result<ResolveDilemmaOutput, ResolveError> {
        match self.params.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.run(input, sink, cancel))
                .await
                .map_err(|_| {
                    warn!("Resolution exceeded deadline of {:?}", deadline);
                    ResolveError::TimedOut(deadline)
                })?,
            None => self.run(input, sink, cancel).await,
        }
    }

    async fn run(
        &self,
        input: ResolveDilemmaInput,
        sink: Arc<dyn EventSink>,
        cancel: &CancellationToken,
    ) -> Result<ResolveDilemmaOutput, ResolveError> {
        let mut phase = Phase::Idle;
        let result = self.run_phases(&mut phase, &input, sink, cancel).await;
        if let Err(e) = &result {
            debug!("Resolution failed in phase {}: {}", phase, e);
            Self::transition(&mut phase, Phase::Errored);
        }
        result
    }

    async fn run_phases(
        &self,
        phase: &mut Phase,
        input: &ResolveDilemmaInput,
        sink: Arc<dyn EventSink>,
        cancel: &CancellationToken,
    ) -> Result<ResolveDilemmaOutput, ResolveError> {
        let history = input.history.render();

        let arguments = self
            .fan_out(phase, input.dilemma.content(), &history, &sink, cancel)
            .await?;

        if cancel.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }

        sink.status("Combining results");
        sink.status("Resolution forming");
        Self::transition(phase, Phase::Judging);

        let resolution = self
            .judge(input.dilemma.content(), &history, &arguments, cancel)
            .await?;

        Self::transition(phase, Phase::Complete);
        info!("Resolution complete ({} chars)", resolution.len());

        Ok(ResolveDilemmaOutput {
            arguments: self
                .panel
                .agents()
                .iter()
                .map(|a| a.role.clone())
                .zip(arguments.into_iter().map(|a| a.argument))
                .collect(),
            resolution,
        })
    }

    /// Dispatch every agent concurrently and wait for all of them.
    ///
    /// Results land in their agent's slot, so the returned order is the
    /// panel order regardless of completion order. When several agents fail,
    /// the error reported is the first one the join observes.
    async fn fan_out(
        &self,
        phase: &mut Phase,
        dilemma: &str,
        history: &str,
        sink: &Arc<dyn EventSink>,
        cancel: &CancellationToken,
    ) -> Result<Vec<ArgumentResponse>, ResolveError> {
        let agents = self.panel.agents();
        info!("Fanning out to {} agents", agents.len());

        // Announce every agent before any of them can report back.
        for agent in agents {
            sink.status(&agent.status_label);
        }
        Self::transition(phase, Phase::FanOutDispatched);

        let mut join_set = JoinSet::new();

        for (slot, agent) in agents.iter().enumerate() {
            let generator = Arc::clone(&self.generator);
            let sink = Arc::clone(sink);
            let cancel = cancel.clone();
            let role = agent.role.clone();
            let prompt = agent.prompt.render(&[
                (PromptTemplate::DILEMMA, dilemma),
                (PromptTemplate::HISTORY, history),
            ]);

            join_set.spawn(async move {
                let result = Self::argue(generator.as_ref(), &cancel, &role, &prompt).await;
                if result.is_ok() {
                    sink.status(&format!("Got response from {}", role));
                }
                (slot, result)
            });
        }

        Self::transition(phase, Phase::Joining);

        let mut slots: Vec<Option<ArgumentResponse>> = vec![None; agents.len()];
        let mut first_error: Option<ResolveError> = None;

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((slot, Ok(argument))) => {
                    debug!("Agent {} responded", agents[slot].role);
                    slots[slot] = Some(argument);
                }
                Ok((slot, Err(e))) => {
                    warn!("Agent {} failed: {}", agents[slot].role, e);
                    first_error.get_or_insert(e);
                }
                Err(e) => {
                    error!("Agent task join error: {}", e);
                    first_error.get_or_insert(ResolveError::Internal(format!(
                        "agent task failed: {}",
                        e
                    )));
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ResolveError::Internal("agent slot left empty".to_string()))
    }

    /// Ask the judge to synthesize every argument.
    async fn judge(
        &self,
        dilemma: &str,
        history: &str,
        arguments: &[ArgumentResponse],
        cancel: &CancellationToken,
    ) -> Result<String, ResolveError> {
        let judge = self.panel.judge();

        let keys: Vec<String> = self
            .panel
            .agents()
            .iter()
            .map(|a| PromptTemplate::argument_key(a.role.as_str()))
            .collect();

        let mut vars: Vec<(&str, &str)> = vec![
            (PromptTemplate::DILEMMA, dilemma),
            (PromptTemplate::HISTORY, history),
        ];
        vars.extend(
            keys.iter()
                .map(String::as_str)
                .zip(arguments.iter().map(|a| a.argument.as_str())),
        );

        let prompt = judge.prompt.render(&vars);
        info!("Asking judge {}", judge.role);

        let resolution = self
            .generator
            .generate(cancel, &judge.role, &prompt)
            .await
            .map_err(|e| ResolveError::judge(&judge.role, e))?;

        if resolution.trim().is_empty() {
            return Err(ResolveError::EmptyResolution(judge.role.clone()));
        }

        Ok(resolution)
    }

    /// Query one agent and decode its structured output.
    async fn argue(
        generator: &G,
        cancel: &CancellationToken,
        role: &Role,
        prompt: &str,
    ) -> Result<ArgumentResponse, ResolveError> {
        let raw = generator
            .generate(cancel, role, prompt)
            .await
            .map_err(|e| ResolveError::agent(role, e))?;

        ArgumentResponse::parse(&raw).map_err(|source| ResolveError::Decode {
            role: role.clone(),
            source,
        })
    }

    fn transition(phase: &mut Phase, next: Phase) {
        debug_assert!(
            phase.can_transition_to(next),
            "invalid phase transition {} -> {}",
            phase,
            next
        );
        debug!("Phase {} -> {}", phase, next);
        *phase = next;
    }
}
