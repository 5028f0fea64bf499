// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    PROXY_REQUESTS_TOTAL,
    PROXY_REQUEST_DURATION,
    UPSTREAM_CALLS,
    UPSTREAM_DURATION,
};

/// Helper to record a finished proxy request
pub fn record_request(profile: &str, status_code: u16, duration_secs: f64) {
    PROXY_REQUESTS_TOTAL
        .with_label_values(&[profile, &status_code.to_string()])
        .inc();

    PROXY_REQUEST_DURATION
        .with_label_values(&[profile])
        .observe(duration_secs);
}

/// Helper to record a Messages API call. `status_code` is `error` when no
/// usable response came back.
pub fn record_upstream_call(mode: &str, status_code: &str, duration_secs: f64) {
    UPSTREAM_CALLS
        .with_label_values(&[mode, status_code])
        .inc();

    UPSTREAM_DURATION
        .with_label_values(&[mode])
        .observe(duration_secs);
}
