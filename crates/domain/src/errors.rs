//! Error types used throughout the client

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Main error type for kintone mini-app operations
#[derive(Error, Debug)]
pub enum KintoneError {
    /// No base URL was supplied at construction.
    #[error("baseUrl is required")]
    MissingBaseUrl,

    /// The auth input carried neither a username nor an API token.
    #[error("auth is required")]
    MissingAuth,

    /// An upload was requested without a local file path.
    #[error("filePath is required")]
    MissingFilePath,

    /// An unrecognized verb string reached descriptor construction.
    #[error("{method} method is not supported")]
    UnsupportedMethod { method: String },

    /// The platform primitive failed before any HTTP response was produced
    /// (network unreachable, local I/O failure). Carries the raw runtime
    /// message.
    #[error("{0}")]
    Platform(String),

    /// The server answered with a non-200 status and a structured body.
    #[error("{0}")]
    Api(ApiErrorResponse),
}

/// Result type alias for kintone mini-app operations
pub type Result<T> = std::result::Result<T, KintoneError>;

/// Failed API response preserved for caller inspection: status code,
/// response headers, and the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

impl ApiErrorResponse {
    /// Error code reported by the server (e.g. `CB_VA01`), if present.
    pub fn code(&self) -> Option<&str> {
        self.body.get("code").and_then(Value::as_str)
    }

    /// Human-readable message reported by the server, if present.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Correlation id reported by the server, if present.
    pub fn id(&self) -> Option<&str> {
        self.body.get("id").and_then(Value::as_str)
    }
}

impl fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => {
                write!(f, "[{}] {} ({})", self.status, message, code)
            }
            (None, Some(message)) => write!(f, "[{}] {}", self.status, message),
            _ => write!(f, "request failed with status {}", self.status),
        }
    }
}
