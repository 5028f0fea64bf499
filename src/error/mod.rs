// Error types for anthropic-proxy
// Author: kelexine (https://github.com/kelexine)

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    /// Caller input is missing required fields.
    #[error("{0}")]
    InvalidRequest(String),

    /// The credential variable is unset or empty.
    #[error("{0} not set")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx answer from the Anthropic API, relayed as-is.
    #[error("Upstream returned HTTP {status}")]
    Upstream { status: StatusCode, body: Value },

    /// Request body could not be read, e.g. over the size limit.
    #[error("{0}")]
    Body(#[from] BytesRejection),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Body(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert ProxyError to HTTP responses for Axum
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ProxyError::Upstream { body, .. } => body,
            other => json!({ "error": other.to_string() }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
