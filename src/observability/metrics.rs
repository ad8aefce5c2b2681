//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lattice_http_requests_total` (counter): requests by method, status
//! - `lattice_http_request_duration_seconds` (histogram): latency by method
//! - `lattice_listener_up` (gauge): 1 while the listener on a port is serving
//! - `lattice_listener_exits_total` (counter): listener terminations by port, outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP scrape endpoint on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "lattice_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!(
        "lattice_http_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_listener_up(port: u16) {
    ::metrics::gauge!("lattice_listener_up", "port" => port.to_string()).set(1.0);
}

/// Record a listener termination, including a failed bind.
pub fn record_listener_exit(port: u16, ok: bool) {
    ::metrics::gauge!("lattice_listener_up", "port" => port.to_string()).set(0.0);
    let outcome = if ok { "ok" } else { "error" };
    ::metrics::counter!(
        "lattice_listener_exits_total",
        "port" => port.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
