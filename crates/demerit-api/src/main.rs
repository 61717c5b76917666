//! # demerit-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the violation intake service.
//! Binds to a configurable port (default 8080).

use std::path::PathBuf;

use demerit_api::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let defaults = AppConfig::default();
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults.port);
    let evidence_dir = std::env::var("DEMERIT_EVIDENCE_DIR")
        .map(PathBuf::from)
        .unwrap_or(defaults.evidence_dir);

    let config = AppConfig { port, evidence_dir };

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!("Evidence directory initialization failed: {e}");
        anyhow::Error::from(e)
    })?;
    tracing::info!(dir = %config.evidence_dir.display(), "evidence directory ready");

    let app = demerit_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Demerit API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
