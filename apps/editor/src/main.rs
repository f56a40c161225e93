mod backend_client;
mod config;
mod errors;
mod models;
mod preview;
mod reconciler;
mod routes;
mod scoring;
mod session;
mod state;
mod tailoring;
mod uploads;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend_client::HttpBackend;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume editor v{}", env!("CARGO_PKG_VERSION"));

    let backend = HttpBackend::new(
        config.resume_api_url.clone(),
        config.resume_api_token.clone(),
        Duration::from_secs(config.backend_timeout_secs),
    )?;
    info!(
        "Backend client initialized ({}, authenticated: {})",
        config.resume_api_url,
        config.resume_api_token.is_some()
    );

    let state = AppState::new(Arc::new(backend), config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the front end's host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
