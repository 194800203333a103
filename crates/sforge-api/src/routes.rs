//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::accessibility::enhance_accessibility;
use crate::handlers::analyze::analyze_video;
use crate::handlers::competitors::analyze_competitors;
use crate::handlers::health::{health, ready};
use crate::handlers::ideas::generate_ideas;
use crate::handlers::optimize::optimize_short;
use crate::handlers::repurpose::repurpose_content;
use crate::handlers::script::{generate_script, script_prefill};
use crate::handlers::series::plan_series;
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    // One endpoint per capability page
    let capability_routes = Router::new()
        .route("/analyze", post(analyze_video))
        .route("/script", post(generate_script))
        .route("/script/prefill", get(script_prefill))
        .route("/optimize", post(optimize_short))
        .route("/series", post(plan_series))
        .route("/competitors", post(analyze_competitors))
        .route("/repurpose", post(repurpose_content))
        .route("/ideas", post(generate_ideas))
        .route("/accessibility", post(enhance_accessibility));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    Router::new()
        .nest("/api", capability_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
