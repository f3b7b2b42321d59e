//! companion-chat HTTP server binary.
//!
//! Starts an axum HTTP server exposing the chat endpoints and the prebuilt
//! frontend bundle.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 5000)
//! - `HOST` — Bind address (default: 0.0.0.0)
//! - `STATIC_DIR` — Frontend bundle directory (default: frontend/build)
//! - `ARC_TIMESTAMP` — `fixed` (default) or `now`
//! - `EXPOSE_ERROR_DETAILS` — include error details in 500 bodies (default: true)
//! - `RUST_LOG` — Tracing filter (default: "info,companion_chat=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use anyhow::Context;
use companion_chat::server::{app_router, AppState};
use companion_chat::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,companion_chat=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let bind_addr = config.bind_addr();
    tracing::debug!(?config, "configuration loaded");

    let app = app_router(AppState::new(config));

    tracing::info!("companion-chat server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             — liveness probe");
    tracing::info!("  POST /api/chat           — keyword reply");
    tracing::info!("  POST /api/unified-chat   — voice-aware reply envelope");
    tracing::info!("  POST /api/emotional-chat — alias of /api/unified-chat");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("companion-chat server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
