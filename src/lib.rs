//! # Companion Chat
//!
//! A small HTTP backend that answers a text message with a supportive reply
//! chosen by keyword matching, optionally shaped by a voice-emotion label the
//! client detected from audio.
//!
//! The substance lives in [`responder`]; [`server`] is the axum adapter that
//! exposes it over JSON.

pub mod config;
pub mod error;
pub mod responder;
pub mod server;

pub use config::{ArcTimestamp, ServerConfig};
pub use error::{ChatError, ConfigError};
pub use responder::{select_reply, unified_reply, ReplyEnvelope};
pub use server::{app_router, AppState};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
