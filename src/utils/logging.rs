//! Structured logging and secret redaction.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides a helper that keeps Anthropic API keys out of log sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{ProxyError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    static ref API_KEY_PATTERN: Regex = Regex::new(r"sk-ant-[A-Za-z0-9_\-]+").unwrap();
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    result.map_err(|e| ProxyError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Replaces every Anthropic API key in `input` with `[REDACTED_API_KEY]`.
///
/// Upstream error bodies and transport errors are run through this before
/// they are logged.
pub fn sanitize(input: &str) -> String {
    API_KEY_PATTERN
        .replace_all(input, "[REDACTED_API_KEY]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = "x-api-key: sk-ant-api03-AbC_d-123 rejected";
        let output = sanitize(input);
        assert_eq!(output, "x-api-key: [REDACTED_API_KEY] rejected");
    }

    #[test]
    fn test_sanitize_multiple_keys() {
        let output = sanitize(r#"{"a":"sk-ant-one","b":"sk-ant-two"}"#);
        assert!(!output.contains("sk-ant-"));
        assert_eq!(output.matches("[REDACTED_API_KEY]").count(), 2);
    }

    #[test]
    fn test_sanitize_leaves_other_text() {
        assert_eq!(sanitize("invalid x-api-key"), "invalid x-api-key");
    }
}
