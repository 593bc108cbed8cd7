//! Axum handlers.
//!
//! The chat handler parses the body itself instead of using the `Json`
//! extractor: an empty body or a missing `Content-Type` must still produce
//! the gateway's `400 Missing required parameters`, not an axum rejection.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::gateway::{CompletionRequest, GatewayError};

use super::AppState;

// ── Errors → responses ────────────────────────────────────────────────────────

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            GatewayError::ProcessingFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": self.to_string(),
                    "message": self.detail().unwrap_or_default(),
                })),
            )
                .into_response(),
        }
    }
}

fn invalid_json(msg: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid JSON body", "message": format!("{msg}") })),
    )
        .into_response()
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /health, GET /api/health
pub(super) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/chatgpt
pub(super) async fn chatgpt(State(state): State<AppState>, body: Bytes) -> Response {
    let req = if body.iter().all(u8::is_ascii_whitespace) {
        CompletionRequest::default()
    } else {
        match serde_json::from_slice::<CompletionRequest>(&body) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "rejecting malformed request body");
                return invalid_json(e);
            }
        }
    };

    let span = info_span!("chatgpt", request_id = %Uuid::now_v7());
    match state.gateway.handle(req).instrument(span).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}
