//! Server configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 5000)
//! - `HOST` — Bind address (default: 0.0.0.0)
//! - `STATIC_DIR` — Prebuilt frontend bundle (default: frontend/build)
//! - `ARC_TIMESTAMP` — `fixed` (default) or `now`
//! - `EXPOSE_ERROR_DETAILS` — include error details in 500 bodies (default: true)

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};

use crate::error::ConfigError;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Timestamp written into every emotional-arc entry in `fixed` mode.
///
/// Existing frontends were built against this constant.
pub const FIXED_ARC_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// How the `timestamp` of an emotional-arc entry is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcTimestamp {
    /// Always [`FIXED_ARC_TIMESTAMP`].
    #[default]
    Fixed,
    /// The UTC time the reply was computed, RFC 3339.
    Now,
}

impl ArcTimestamp {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "now" => Ok(Self::Now),
            _ => Err(ConfigError::InvalidArcTimestamp(value.to_string())),
        }
    }

    /// Produce the timestamp for an arc entry created right now.
    pub fn stamp(&self) -> String {
        match self {
            Self::Fixed => FIXED_ARC_TIMESTAMP.to_string(),
            Self::Now => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the prebuilt frontend (`index.html` + assets).
    pub static_dir: PathBuf,
    pub arc_timestamp: ArcTimestamp,
    /// Include internal error text in 500 responses.
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("frontend/build"),
            arc_timestamp: ArcTimestamp::Fixed,
            expose_error_details: true,
        }
    }
}

impl ServerConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let arc_timestamp = match lookup("ARC_TIMESTAMP") {
            Some(value) => ArcTimestamp::parse(&value)?,
            None => defaults.arc_timestamp,
        };

        let expose_error_details = lookup("EXPOSE_ERROR_DETAILS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.expose_error_details);

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            arc_timestamp,
            expose_error_details,
        })
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
