//! GroundSearch Server - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Answers web-grounded questions on `GET /api/search?q=`
//! - Continues conversations on `POST /api/follow-up`
//! - Optionally serves a prebuilt web UI as static files
//!
//! Access via: http://localhost:5000

use anyhow::{anyhow, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod api;
mod cli;
mod commands;
mod cors;
mod router;
mod scheduler;
mod state;
#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use groundsearch_core::modules::{config as core_config, logger};
use groundsearch_core::{GeminiClient, MemorySessionStore};
use groundsearch_types::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(&cli.log_level).map_err(|e| anyhow!(e))?;

    let mut config = core_config::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Commands::Ask { query, session, server } => {
            let base_url = server.unwrap_or_else(|| {
                format!("http://{}:{}", config.server.host, config.server.port)
            });
            commands::ask(base_url, session, &query).await
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    core_config::require_api_key(&config)?;

    info!("🚀 GroundSearch starting with model {}", config.model.model);

    let model = Arc::new(GeminiClient::from_config(&config.model)?);
    let sessions = Arc::new(MemorySessionStore::from_ttl_secs(config.session.ttl_secs));
    if sessions.ttl().is_some() {
        scheduler::start_session_cleanup(sessions.clone());
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let state = AppState::new(config, model, sessions);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;

    info!("🌐 Server listening on http://{}", listener.local_addr()?);
    info!("🔌 API available at http://{}:{}/api/", host, port);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
