//! HTTP server for the companion chat service.
//!
//! A thin adapter: decode JSON, validate it into a [`ChatRequest`], call the
//! responder, encode the reply.
//!
//! # Endpoints
//!
//! - `GET  /health`             — Liveness probe
//! - `POST /api/chat`           — Text-only keyword reply
//! - `POST /api/unified-chat`   — Voice-aware reply envelope
//! - `POST /api/emotional-chat` — Alias of `/api/unified-chat`

pub mod request;
pub mod routes;

pub use request::ChatRequest;
pub use routes::{app_router, AppState};
