//! Handle Dilemma use case
//!
//! The transport-independent part of handling one `/zenbot` request:
//! validate, announce, resolve, then stream the resolution or report the
//! single error that ended it.

use crate::ports::event_sink::EventSink;
use crate::ports::generation::GenerationService;
use crate::use_cases::resolve_dilemma::{
    ResolveDilemmaInput, ResolveDilemmaUseCase, ResolveError,
};
use crate::use_cases::stream_resolution::ProgressiveStreamer;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use zenbot_domain::{
    ConversationHistory, ConversationId, Dilemma, DomainError, MessageId, ZenbotRequest,
};

/// Errors that ended a request. Each one has already been reported to the
/// client as exactly one `error` event.
#[derive(Error, Debug)]
pub enum HandleDilemmaError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Outcome of a fully streamed request
#[derive(Debug, Clone)]
pub struct HandleDilemmaOutput {
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
    pub events_streamed: usize,
}

/// Use case for one dilemma request
pub struct HandleDilemmaUseCase<G: GenerationService + ?Sized + 'static> {
    resolver: ResolveDilemmaUseCase<G>,
    streamer: ProgressiveStreamer,
}

impl<G: GenerationService + ?Sized + 'static> HandleDilemmaUseCase<G> {
    pub fn new(resolver: ResolveDilemmaUseCase<G>, streamer: ProgressiveStreamer) -> Self {
        Self { resolver, streamer }
    }

    pub fn resolver(&self) -> &ResolveDilemmaUseCase<G> {
        &self.resolver
    }

    /// Execute the use case.
    ///
    /// The client sees either `status*, message+` or `status*, error`;
    /// nothing is emitted after an error.
    pub async fn execute(
        &self,
        request: ZenbotRequest,
        sink: Arc<dyn EventSink>,
        cancel: &CancellationToken,
    ) -> Result<HandleDilemmaOutput, HandleDilemmaError> {
        let dilemma = match Dilemma::try_new(request.message) {
            Ok(d) => d,
            Err(e) => {
                warn!("Rejected request: {}", e);
                sink.error(&e.to_string());
                return Err(e.into());
            }
        };

        let conversation_id = request
            .conversation_id
            .unwrap_or_else(|| ConversationId::from_unix_seconds(chrono::Utc::now().timestamp()));
        info!(conversation_id = %conversation_id, "Handling dilemma");

        sink.status("Processing dilemma...");

        // Prior turns are not stored, so the history is always empty.
        let input = ResolveDilemmaInput::new(dilemma).with_history(ConversationHistory::empty());

        let output = match self.resolver.execute(input, Arc::clone(&sink), cancel).await {
            Ok(output) => output,
            Err(e) => {
                if e.is_internal() {
                    error!(conversation_id = %conversation_id, "Resolution fault: {}", e);
                } else {
                    warn!(conversation_id = %conversation_id, "Resolution failed: {}", e);
                }
                sink.error(&e.to_string());
                return Err(e.into());
            }
        };

        let (message_id, events_streamed) =
            self.streamer.stream(sink.as_ref(), &output.resolution).await;

        info!(
            conversation_id = %conversation_id,
            message_id = %message_id,
            "Resolution streamed"
        );

        Ok(HandleDilemmaOutput {
            conversation_id,
            message_id,
            events_streamed,
        })
    }
}
