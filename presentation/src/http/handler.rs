//! `POST /zenbot` handler
//!
//! Streams the request's lifecycle as server-sent events. The HTTP status is
//! always 200 once the route matched; failures are reported in-band as one
//! `error` event.

use super::router::AppState;
use crate::sse::SseEmitter;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::stream;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use zenbot_application::EventSink;
use zenbot_domain::ZenbotRequest;

const INVALID_JSON: &str = "Invalid JSON format";

pub async fn zenbot(State(state): State<AppState>, body: Bytes) -> Response {
    let (emitter, frames) = SseEmitter::channel();

    match serde_json::from_slice::<ZenbotRequest>(&body) {
        Ok(request) => spawn_request(state, request, emitter),
        Err(e) => {
            warn!("Rejected request body: {}", e);
            emitter.error(INVALID_JSON);
        }
    }

    event_stream(frames)
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Run the request on its own task, tied to the client connection.
///
/// The token is cancelled when the response body is dropped (client gone)
/// and, through the drop guard, when the request task ends for any reason.
fn spawn_request(state: AppState, request: ZenbotRequest, emitter: SseEmitter) {
    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();
    let request_cancel = cancel.clone();
    let sink: Arc<dyn EventSink> = Arc::new(emitter.clone());

    tokio::spawn(async move {
        let _guard = guard;
        match state.dilemmas.execute(request, sink, &request_cancel).await {
            Ok(out) => debug!(
                conversation_id = %out.conversation_id,
                events = out.events_streamed,
                "Request complete"
            ),
            // Already reported to the client.
            Err(e) => debug!("Request ended with error: {}", e),
        }
    });

    tokio::spawn(async move {
        tokio::select! {
            _ = emitter.closed() => {
                debug!("Client disconnected, cancelling request");
                cancel.cancel();
            }
            _ = cancel.cancelled() => {}
        }
    });
}

/// Streaming `text/event-stream` response fed by `frames`.
///
/// The body ends when every sender is gone.
fn event_stream(frames: mpsc::UnboundedReceiver<Bytes>) -> Response {
    let body = stream::unfold(frames, |mut frames| async move {
        frames
            .recv()
            .await
            .map(|frame| (Ok::<_, Infallible>(frame), frames))
    });

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/event-stream")),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
            (header::CONNECTION, HeaderValue::from_static("keep-alive")),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
        ],
        Body::from_stream(body),
    )
        .into_response()
}
