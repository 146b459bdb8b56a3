//! Metrics collection and exposition.
//!
//! # Metrics
//! - `hub_proxy_requests_total` (counter): proxy requests by endpoint, status
//! - `hub_proxy_request_duration_seconds` (histogram): proxy latency by endpoint

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
pub fn init_exporter(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }
}

/// Record one proxy request outcome.
pub fn record_proxy_request(endpoint: &'static str, status: u16, started: Instant) {
    metrics::counter!(
        "hub_proxy_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "hub_proxy_request_duration_seconds",
        "endpoint" => endpoint
    )
    .record(started.elapsed().as_secs_f64());
}
