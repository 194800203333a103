//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use sforge_models::Capability;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "sforge_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "sforge_http_request_duration_seconds";

    // Generation metrics
    pub const GENERATIONS_TOTAL: &str = "sforge_generations_total";
    pub const GENERATION_DURATION_SECONDS: &str = "sforge_generation_duration_seconds";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record the outcome of one external-model dispatch.
pub fn record_generation(capability: Capability, outcome: &'static str, duration_secs: f64) {
    let labels = [
        ("capability", capability.as_str().to_string()),
        ("outcome", outcome.to_string()),
    ];

    counter!(names::GENERATIONS_TOTAL, &labels).increment(1);
    histogram!(names::GENERATION_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Middleware that records request counts and latency.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
