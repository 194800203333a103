//! Axum HTTP API server.
//!
//! This crate provides:
//! - One JSON endpoint per AI capability
//! - Input validation with inline per-field errors
//! - Security headers and request-ID propagation
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
