//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): responses by HTTP status
//! - `gateway_lookups_total` (counter): classified lookups by result
//! - `gateway_upstream_duration_seconds` (histogram): upstream call latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one rendered response.
pub fn record_request(status: u16) {
    metrics::counter!("gateway_requests_total", "status" => status.to_string()).increment(1);
}

/// Count one classified lookup.
pub fn record_lookup(result: &'static str) {
    metrics::counter!("gateway_lookups_total", "result" => result).increment(1);
}

/// Record how long an upstream call took.
pub fn record_upstream(start: Instant) {
    metrics::histogram!("gateway_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}
