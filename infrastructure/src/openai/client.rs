//! `GenerationService` adapter for OpenAI-compatible chat completions

use super::error::OpenAiError;
use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, error_message};
use crate::config::{FileModelsConfig, FileProviderConfig};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use zenbot_application::{GenerationError, GenerationService};
use zenbot_domain::Role;

/// Chat completions client shared by every request.
///
/// `reqwest::Client` pools connections internally, so one instance serves
/// all concurrent agent and judge calls.
pub struct OpenAiGenerationService {
    client: reqwest::Client,
    url: String,
    api_key: String,
    /// Keyed by lowercased role name.
    models: BTreeMap<String, String>,
}

impl OpenAiGenerationService {
    /// Build the adapter, resolving the API key from configuration or the
    /// environment.
    pub fn from_config(
        provider: &FileProviderConfig,
        models: &FileModelsConfig,
    ) -> Result<Self, OpenAiError> {
        let api_key = provider
            .resolve_api_key()
            .ok_or_else(|| OpenAiError::MissingApiKey {
                env: provider.api_key_env.clone(),
            })?;
        Self::with_api_key(provider, models, api_key)
    }

    /// Build the adapter with an explicit key.
    pub fn with_api_key(
        provider: &FileProviderConfig,
        models: &FileModelsConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, OpenAiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(provider.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: provider.chat_completions_url(),
            api_key: api_key.into(),
            models: models.normalized(),
        })
    }

    fn model_for(&self, role: &Role) -> Option<&str> {
        self.models
            .get(&role.as_str().to_ascii_lowercase())
            .map(String::as_str)
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionRequest::system(model, prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GenerationError::ConnectionError(e.to_string())
                } else {
                    GenerationError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        body.into_first_content()
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl GenerationService for OpenAiGenerationService {
    async fn generate(
        &self,
        cancel: &CancellationToken,
        role: &Role,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let model = self
            .model_for(role)
            .ok_or_else(|| GenerationError::UnknownRole(role.clone()))?;

        debug!(role = %role, model = %model, "Sending chat completion");

        // Dropping the in-flight future aborts the HTTP exchange.
        let result = tokio::select! {
            _ = cancel.cancelled() => Err(GenerationError::Cancelled),
            result = self.complete(model, prompt) => result,
        };

        match &result {
            Ok(text) => debug!(role = %role, bytes = text.len(), "Chat completion received"),
            Err(GenerationError::Cancelled) => debug!(role = %role, "Chat completion cancelled"),
            Err(e) => warn!(role = %role, "Chat completion failed: {}", e),
        }
        result
    }

    fn supports_role(&self, role: &Role) -> bool {
        self.model_for(role).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Serves `/v1/chat/completions` on an ephemeral port.
    async fn serve(status: StatusCode, reply: Value, delay: Duration) -> (String, Seen) {
        let seen: Seen = Arc::default();

        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            let auth = headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            seen.lock().unwrap().push((auth, body));
                            tokio::time::sleep(delay).await;
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(Arc::clone(&seen));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1", addr), seen)
    }

    fn service(base_url: String) -> OpenAiGenerationService {
        let provider = FileProviderConfig {
            base_url,
            ..Default::default()
        };
        OpenAiGenerationService::with_api_key(&provider, &FileModelsConfig::default(), "sk-test")
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_system_prompt_to_mapped_model() {
        let (url, seen) = serve(
            StatusCode::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": "Breathe."}}]}),
            Duration::ZERO,
        )
        .await;

        let text = service(url)
            .generate(&CancellationToken::new(), &Role::zen_judge(), "Decide.")
            .await
            .unwrap();

        assert_eq!(text, "Breathe.");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Bearer sk-test"));
        assert_eq!(
            seen[0].1,
            json!({"model": "gpt-4o", "messages": [{"role": "system", "content": "Decide."}]})
        );
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_message() {
        let (url, _) = serve(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"message": "Rate limit reached", "type": "requests"}}),
            Duration::ZERO,
        )
        .await;

        let err = service(url)
            .generate(&CancellationToken::new(), &Role::build_fast(), "p")
            .await
            .unwrap_err();

        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_choices_is_empty_response() {
        let (url, _) = serve(StatusCode::OK, json!({"choices": []}), Duration::ZERO).await;

        let err = service(url)
            .generate(&CancellationToken::new(), &Role::stillness(), "p")
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::EmptyResponse));
        assert_eq!(err.to_string(), "no choices returned from provider");
    }

    #[tokio::test]
    async fn test_cancellation_returns_promptly() {
        let (url, _) = serve(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "too late"}}]}),
            Duration::from_secs(30),
        )
        .await;

        let service = service(url);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let started = std::time::Instant::now();
        let err = service
            .generate(&cancel, &Role::build_fast(), "p")
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unmapped_role() {
        let service = service("http://127.0.0.1:9/v1".to_string());
        let role = Role::new("Oracle").unwrap();

        assert!(!service.supports_role(&role));
        assert!(service.supports_role(&Role::zen_judge()));
        let err = service
            .generate(&CancellationToken::new(), &role, "p")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::UnknownRole(_)));
    }

    #[test]
    fn test_missing_api_key() {
        let provider = FileProviderConfig {
            api_key_env: "ZENBOT_TEST_SURELY_UNSET_KEY".to_string(),
            ..Default::default()
        };
        let err = OpenAiGenerationService::from_config(&provider, &FileModelsConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, OpenAiError::MissingApiKey { .. }));
        assert!(err.to_string().contains("ZENBOT_TEST_SURELY_UNSET_KEY"));
    }
}
