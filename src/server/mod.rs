//! Axum HTTP server — exposes the completion gateway over JSON.
//!
//! ## URL layout
//!
//! ```text
//! GET  /health        → {"status":"ok"}
//! GET  /api/health    → {"status":"ok"}
//! POST /api/chatgpt   → completion gateway
//! ```
//!
//! `run()` drives the axum event loop; the [`CancellationToken`] is wired
//! to axum's graceful shutdown.

mod api;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::gateway::Gateway;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — the gateway is reference-counted.
#[derive(Clone)]
pub(crate) struct AppState {
    pub gateway: Arc<Gateway>,
}

// ── HttpServer ────────────────────────────────────────────────────────────────

pub struct HttpServer {
    config: ServerConfig,
    gateway: Arc<Gateway>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, gateway: Arc<Gateway>) -> Self {
        Self { config, gateway }
    }

    /// Bind and serve until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), AppError> {
        let bind_addr = self.config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already-bound listener. Split from [`run`](Self::run) so
    /// callers can bind port 0 and read the local address first.
    pub async fn serve(self, listener: TcpListener, shutdown: CancellationToken) -> Result<(), AppError> {
        let local_addr = listener.local_addr()?;
        info!(%local_addr, provider = self.gateway.provider().name(), "http server listening");
        if let Some(host) = &self.config.public_host {
            info!(endpoint = %format!("https://{host}/api/chatgpt"), "public endpoint");
        }

        let router = build_router(self.gateway, self.config.max_body_bytes);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(|e| AppError::Server(format!("axum server error: {e}")))?;

        info!("http server shut down");
        Ok(())
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the full application router. Public so tests can drive it with
/// `tower::ServiceExt::oneshot` without binding a socket.
pub fn build_router(gateway: Arc<Gateway>, max_body_bytes: usize) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/health",      get(api::health))
        .route("/api/health",  get(api::health))
        .route("/api/chatgpt", post(api::chatgpt))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
