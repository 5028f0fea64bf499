//! Axum-based HTTP server for the anthropic-proxy service.
//!
//! This module sets up the HTTP server, configures routes, and forwards
//! browser uploads (a PDF or page images) to the Anthropic Messages API.
//!
//! # Components
//!
//! - `handlers`: Proxy, preflight, health and metrics endpoints.
//! - `middleware`: Cross-origin headers and request ID tracking.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use middleware::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use routes::{create_router, AppState};
