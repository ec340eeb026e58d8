//! Shared fakes for use case tests.

use crate::ports::event_sink::EventSink;
use crate::ports::generation::{GenerationError, GenerationService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use zenbot_domain::{Event, EventKind, Role};

/// Records every emitted event in order.
#[derive(Default)]
pub(crate) struct CollectingSink {
    events: Mutex<Vec<Event>>,
}

impl CollectingSink {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn of_kind(&self, kind: EventKind) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.payload)
            .collect()
    }

    pub(crate) fn position(&self, payload: &str) -> Option<usize> {
        self.events().iter().position(|e| e.payload == payload)
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

/// How a scripted role answers.
#[derive(Clone)]
pub(crate) enum Reply {
    Text(String),
    Fail(String),
    /// Answer after a delay.
    Delayed(Duration, String),
    /// Answer with the prompt it was given.
    Echo,
    /// Wait for cancellation, then report it.
    Hang,
}

/// Generation service answering from a per-role script.
pub(crate) struct ScriptedGeneration {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<(String, String)>>,
    cancellations_observed: AtomicUsize,
}

impl ScriptedGeneration {
    pub(crate) fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            cancellations_observed: AtomicUsize::new(0),
        }
    }

    /// The zen panel answering successfully.
    pub(crate) fn zen() -> Self {
        Self::new()
            .with("BuildFast", Reply::Text(r#"{"argument": "Ship it today."}"#.into()))
            .with("Stillness", Reply::Text(r#"{"argument": "Sleep on it."}"#.into()))
            .with("ZenJudge", Reply::Text("To rush is to pause. Ship tomorrow.".into()))
    }

    pub(crate) fn with(mut self, role: &str, reply: Reply) -> Self {
        self.replies.insert(role.to_string(), reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_for(&self, role: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(r, _)| r == role)
            .map(|(_, prompt)| prompt)
            .collect()
    }

    pub(crate) fn cancellations_observed(&self) -> usize {
        self.cancellations_observed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationService for ScriptedGeneration {
    async fn generate(
        &self,
        cancel: &CancellationToken,
        role: &Role,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((role.to_string(), prompt.to_string()));

        let reply = self
            .replies
            .get(role.as_str())
            .cloned()
            .ok_or_else(|| GenerationError::UnknownRole(role.clone()))?;

        match reply {
            Reply::Text(text) => Ok(text),
            Reply::Fail(message) => Err(GenerationError::RequestFailed(message)),
            Reply::Echo => Ok(prompt.to_string()),
            Reply::Delayed(delay, text) => {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        self.cancellations_observed.fetch_add(1, Ordering::SeqCst);
                        Err(GenerationError::Cancelled)
                    }
                    _ = tokio::time::sleep(delay) => Ok(text),
                }
            }
            Reply::Hang => {
                cancel.cancelled().await;
                self.cancellations_observed.fetch_add(1, Ordering::SeqCst);
                Err(GenerationError::Cancelled)
            }
        }
    }

    fn supports_role(&self, role: &Role) -> bool {
        self.replies.contains_key(role.as_str())
    }
}
