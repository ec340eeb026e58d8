//! CLI entrypoint for zenbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP API.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use zenbot_application::{
    GenerationService, HandleDilemmaUseCase, ProgressiveStreamer, ResolveDilemmaUseCase,
};
use zenbot_domain::Panel;
use zenbot_infrastructure::{ConfigLoader, OpenAiGenerationService};
use zenbot_presentation::{AppState, Cli, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config_sources {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Held until exit so the file writer flushes.
    let _log_guard = logging::init(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting zenbot");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load_validated(cli.config.as_deref())?
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // === Dependency Injection ===
    let generator = Arc::new(OpenAiGenerationService::from_config(
        &config.provider,
        &config.models,
    )?);

    let panel = Panel::zen();
    let unmapped: Vec<String> = panel
        .roles()
        .filter(|role| !generator.supports_role(role))
        .map(ToString::to_string)
        .collect();
    if !unmapped.is_empty() {
        bail!(
            "No model configured for role(s) {}; add them under [models]",
            unmapped.join(", ")
        );
    }

    let generator: Arc<dyn GenerationService> = generator;
    let resolver = ResolveDilemmaUseCase::new(generator, Arc::new(panel))
        .with_params(config.orchestration.to_params());
    let dilemmas =
        HandleDilemmaUseCase::new(resolver, ProgressiveStreamer::new(config.streaming.to_params()));

    let app = router(AppState::new(dilemmas));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown requested");
}
