//! Axum route handlers for the companion chat server.
//!
//! # Routes
//!
//! - `GET  /health`              — Returns `{"status": "ok", "version": "0.1.0"}`
//! - `POST /api/chat`            — Keyword reply, `{"reply": ...}`
//! - `POST /api/unified-chat`    — Voice-aware reply envelope
//! - `POST /api/emotional-chat`  — Alias of `/api/unified-chat`
//! - anything else               — Frontend bundle, `index.html` for unknown paths

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::request::ChatRequest;
use crate::config::ServerConfig;
use crate::error::{ApiError, ChatError};
use crate::responder::{select_reply, unified_reply, ReplyEnvelope};

/// Shared application state for the HTTP server.
///
/// Read-only; handlers hold no mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn reject(&self, error: ChatError) -> ApiError {
        ApiError::new(error, self.config.expose_error_details)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/unified-chat", post(unified_chat_handler))
        .route("/api/emotional-chat", post(unified_chat_handler));

    let router = with_frontend(api, &state.config.static_dir);

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the prebuilt frontend for every path no API route claims.
///
/// Unknown paths get `index.html` so client-side routing works. Without a
/// bundle on disk, unknown paths are a JSON 404.
fn with_frontend(router: Router<AppState>, static_dir: &Path) -> Router<AppState> {
    if static_dir.is_dir() {
        tracing::debug!(dir = %static_dir.display(), "serving frontend bundle");
        let index = ServeFile::new(static_dir.join("index.html"));
        router.fallback_service(ServeDir::new(static_dir).fallback(index))
    } else {
        tracing::warn!(
            dir = %static_dir.display(),
            "frontend bundle not found, static serving disabled"
        );
        router.fallback(not_found_handler)
    }
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "companion-chat",
    }))
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "Not found"})),
    )
}

/// Decode and validate the body shared by both chat endpoints.
fn parse_request(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ChatRequest, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "could not decode request body");
        state.reject(ChatError::MissingBody)
    })?;
    tracing::debug!(payload = %body, "request received");

    ChatRequest::from_value(&body).map_err(|e| state.reject(e))
}

/// POST /api/chat — reply chosen from the detailed keyword ladder.
///
/// Request:  `{ "message": string }` (or legacy `{ "text": string }`)
/// Response: `{ "reply": string }`
async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let request = parse_request(&state, payload)?;
    let selection = select_reply(&request.message);
    tracing::debug!(category = ?selection.category, "selected reply");

    Ok(Json(serde_json::json!({ "reply": selection.reply })))
}

/// POST /api/unified-chat — voice-aware reply with mood metadata.
///
/// Request:  `{ "message": string, "voiceEmotion"?: string, "currentMood"?: string }`
/// Response: [`ReplyEnvelope`]
async fn unified_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReplyEnvelope>, ApiError> {
    let request = parse_request(&state, payload)?;
    tracing::debug!(
        voice_emotion = ?request.voice_emotion,
        current_mood = %request.current_mood,
        "unified chat"
    );

    let envelope = unified_reply(
        &request.message,
        request.voice_emotion.as_deref(),
        state.config.arc_timestamp,
    );
    Ok(Json(envelope))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
