// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    CounterVec, HistogramVec, Opts, Registry, TextEncoder, Encoder,
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // PROXY REQUEST METRICS
    // ============================================================================

    /// Total number of proxied uploads, by outcome
    pub static ref PROXY_REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("proxy_requests_total", "Total number of proxy requests"),
        &["profile", "status_code"],
        REGISTRY
    ).unwrap();

    /// End-to-end proxy request duration
    pub static ref PROXY_REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("proxy_request_duration_seconds", "Proxy request duration in seconds")
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["profile"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPSTREAM API METRICS
    // ============================================================================

    /// Total Messages API calls
    pub static ref UPSTREAM_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("upstream_calls_total", "Total Anthropic Messages API calls"),
        &["mode", "status_code"],
        REGISTRY
    ).unwrap();

    /// Messages API call duration
    pub static ref UPSTREAM_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("upstream_call_duration_seconds", "Anthropic Messages API call duration")
            .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0]),
        &["mode"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
