//! quizdesk-server — The quiz web application.
//!
//! Wires the core catalog, grader, and ledger to an axum router with
//! cookie-session login gating and server-rendered pages.

use anyhow::{Context, Result};

use quizdesk_core::Catalog;

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{load_config, load_config_from, QuizdeskConfig};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

/// Load the configured catalog, or the bundled one if none is configured.
pub fn load_catalog(config: &QuizdeskConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog: {}", path.display())),
        None => Catalog::builtin(),
    }
}

/// Run the server until Ctrl-C.
pub async fn serve(config: QuizdeskConfig) -> Result<()> {
    let catalog = load_catalog(&config)?;
    tracing::info!(quizzes = catalog.len(), "catalog loaded");
    if catalog.is_empty() {
        tracing::warn!("catalog is empty, the quiz list will be blank");
    }
    if config.uses_demo_account() {
        tracing::warn!(
            "demo account '{}' is enabled, configure [users] before exposing this server",
            config::DEMO_USERNAME
        );
    }

    let state = AppState::new(catalog, &config);
    if state.users.is_empty() {
        tracing::warn!("no users configured, nobody can log in");
    } else {
        tracing::info!(users = state.users.len(), "user registry loaded");
    }
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutting down");
}
