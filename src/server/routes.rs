// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    health_handler, menu_handler, menu_pdf_handler, metrics_handler, preflight_handler,
};
use super::middleware::{cors_layers, request_id_layers};
use crate::anthropic::AnthropicClient;
use crate::config::AppConfig;
use crate::credentials::CredentialProvider;
use crate::error::Result;
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<AnthropicClient>,
    pub credentials: Arc<dyn CredentialProvider>,
}

pub fn create_router(
    config: AppConfig,
    client: AnthropicClient,
    credentials: Arc<dyn CredentialProvider>,
) -> Result<Router> {
    let body_limit = config.server.body_limit_mb * 1024 * 1024;

    let state = AppState {
        config,
        client: Arc::new(client),
        credentials,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    // Methods other than OPTIONS all take the upload path, so a GET gets the
    // same JSON parse error a bodiless POST would
    let mut proxy_routes = Router::new()
        .route(
            "/anthropic-proxy",
            post(menu_handler).options(preflight_handler).fallback(menu_handler),
        )
        .route(
            "/anthropic-pdf-proxy",
            post(menu_pdf_handler).options(preflight_handler).fallback(menu_pdf_handler),
        );
    for layer in cors_layers() {
        proxy_routes = proxy_routes.layer(layer);
    }

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .merge(proxy_routes)
        // Enforced by the body extractor, so oversize uploads still get the
        // JSON error and CORS headers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
