// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{ProxyError, Result};
use crate::metrics;
use crate::models::inbound::InboundRequest;
use crate::translation::{translate_request, validate, ProxyProfile};
use crate::utils::logging::sanitize;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Presence only; the key itself never leaves the provider
    let credential_check = if state.credentials.is_configured() {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("{} is set", state.config.anthropic.api_key_env),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: format!(
                "{} not set; proxy requests will fail",
                state.config.anthropic.api_key_env
            ),
        }
    };
    checks.insert("credentials".to_string(), credential_check);

    checks.insert(
        "configuration".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!(
                "Upstream: {}, model: {}",
                state.client.messages_url(),
                state.config.anthropic.model
            ),
        },
    );

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}

/// Cross-origin preflight. CORS headers are added by the route layers.
pub async fn preflight_handler() -> &'static str {
    "ok"
}

/// Handler for /anthropic-proxy (PDF or images, current schema)
pub async fn menu_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    proxy(&state, &ProxyProfile::MENU, body).await
}

/// Handler for /anthropic-pdf-proxy (PDF only, first-generation schema)
pub async fn menu_pdf_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    proxy(&state, &ProxyProfile::MENU_PDF, body).await
}

async fn proxy(
    state: &AppState,
    profile: &ProxyProfile,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();

    let result = match body {
        Ok(body) => forward(state, profile, &body).await,
        Err(rejection) => Err(ProxyError::from(rejection)),
    };

    let response = match result {
        Ok(upstream_body) => (StatusCode::OK, Json(upstream_body)).into_response(),
        Err(e) => {
            log_failure(profile, &e);
            e.into_response()
        }
    };

    metrics::record_request(
        profile.name,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

/// Parse, validate, translate and send one upload; yields the upstream body.
async fn forward(state: &AppState, profile: &ProxyProfile, body: &[u8]) -> Result<Value> {
    let inbound: InboundRequest = serde_json::from_slice(body)?;

    validate(&inbound, profile)?;
    let api_key = state.credentials.api_key()?;

    let translated = translate_request(&inbound, profile, &state.config.anthropic)?;
    let mode = translated.mode.as_str();

    info!(
        "Forwarding {} upload: profile={}, model={}, template={}",
        mode,
        profile.name,
        translated.body.model,
        if inbound.prompt().is_some() { "custom" } else { profile.template.name() }
    );

    let started = Instant::now();
    let upstream = state
        .client
        .send_messages(
            &translated.body,
            &api_key,
            translated.beta_header(&state.config.anthropic),
        )
        .await;

    let status_label = match &upstream {
        Ok(response) => response.status.as_u16().to_string(),
        Err(_) => "error".to_string(),
    };
    metrics::record_upstream_call(mode, &status_label, started.elapsed().as_secs_f64());

    upstream?.into_result()
}

fn log_failure(profile: &ProxyProfile, err: &ProxyError) {
    match err {
        ProxyError::InvalidRequest(msg) => {
            warn!("Rejected {} request: {}", profile.name, msg);
        }
        ProxyError::Upstream { status, body } => {
            warn!(
                "Relaying upstream HTTP {} for {}: {}",
                status,
                profile.name,
                sanitize(&body.to_string())
            );
        }
        other => {
            error!("{} request failed: {}", profile.name, sanitize(&other.to_string()));
        }
    }
}
