//! Error kinds for the chat service and their HTTP mapping.
//!
//! Client errors (`MissingBody`, `EmptyMessage`) are returned as 400 with a
//! short message. Everything else is an `Internal` error and becomes a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors produced while turning a request into a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The body was absent, not JSON, or an empty JSON document.
    #[error("No JSON received")]
    MissingBody,

    /// The message was empty or whitespace-only after trimming.
    #[error("Message field is empty")]
    EmptyMessage,

    /// Anything else that went wrong while computing the reply.
    #[error("Server error: {0}")]
    Internal(String),
}

impl ChatError {
    /// HTTP status the boundary answers with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingBody | Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingBody => "MissingBody",
            Self::EmptyMessage => "EmptyMessage",
            Self::Internal(_) => "InternalError",
        }
    }

    /// JSON body sent to the client.
    ///
    /// `expose_details` controls whether the internal error text is included
    /// for 500 responses.
    pub fn to_body(&self, expose_details: bool) -> serde_json::Value {
        match self {
            Self::MissingBody | Self::EmptyMessage => {
                serde_json::json!({ "error": self.to_string() })
            }
            Self::Internal(details) if expose_details => {
                serde_json::json!({ "error": "Server error", "details": details })
            }
            Self::Internal(_) => serde_json::json!({ "error": "Server error" }),
        }
    }
}

/// A [`ChatError`] bound to the server's detail-exposure policy.
///
/// Handlers return `Result<Json<_>, ApiError>`; the conversion to a response
/// happens here and nowhere else.
#[derive(Debug)]
pub struct ApiError {
    pub error: ChatError,
    pub expose_details: bool,
}

impl ApiError {
    pub fn new(error: ChatError, expose_details: bool) -> Self {
        Self {
            error,
            expose_details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.error {
            ChatError::Internal(details) => {
                tracing::error!(kind = self.error.kind(), %details, "request failed");
            }
            other => {
                tracing::debug!(kind = other.kind(), "rejected request");
            }
        }
        let status = self.error.status_code();
        (status, Json(self.error.to_body(self.expose_details))).into_response()
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// `ARC_TIMESTAMP` was set to something other than `fixed` or `now`.
    #[error("Invalid ARC_TIMESTAMP value '{0}' (expected 'fixed' or 'now')")]
    InvalidArcTimestamp(String),
}
