//! Route table and shared state

use super::handler;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use zenbot_application::{GenerationService, HandleDilemmaUseCase};

/// State shared by every request.
///
/// Holds no per-request data: each request gets its own emitter and
/// cancellation token.
#[derive(Clone)]
pub struct AppState {
    pub dilemmas: Arc<HandleDilemmaUseCase<dyn GenerationService>>,
}

impl AppState {
    pub fn new(dilemmas: HandleDilemmaUseCase<dyn GenerationService>) -> Self {
        Self {
            dilemmas: Arc::new(dilemmas),
        }
    }
}

/// Build the application router.
///
/// Only `POST` is routed on `/zenbot`; any other method gets an empty
/// `405 Method Not Allowed` before streaming starts.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/zenbot", post(handler::zenbot))
        .route("/healthz", get(handler::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
