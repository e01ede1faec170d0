//! Metrics collection.
//!
//! # Metrics
//! - `selector_selections_total` (counter): selections by policy and server

/// Count one selection of `server` under `policy`.
pub fn record_selection(policy: &'static str, server: &str) {
    metrics::counter!(
        "selector_selections_total",
        "policy" => policy,
        "server" => server.to_string()
    )
    .increment(1);
}
