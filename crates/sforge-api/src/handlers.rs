//! Request handlers, one module per capability page.

pub mod accessibility;
pub mod analyze;
pub mod competitors;
pub mod health;
pub mod ideas;
pub mod optimize;
pub mod repurpose;
pub mod script;
pub mod series;

use std::future::Future;
use std::time::Instant;

use axum::Json;
use tracing::warn;

use sforge_genai::GenAiResult;
use sforge_models::Capability;

use crate::error::ApiResult;
use crate::metrics;

/// Drive one dispatch to completion, recording the outcome.
///
/// Failures are logged here with their original cause; the client only ever
/// sees the generic notice the error mapping produces.
pub(crate) async fn run_generation<T, F>(capability: Capability, call: F) -> ApiResult<Json<T>>
where
    F: Future<Output = GenAiResult<T>>,
{
    let start = Instant::now();
    match call.await {
        Ok(output) => {
            metrics::record_generation(capability, "success", start.elapsed().as_secs_f64());
            Ok(Json(output))
        }
        Err(e) => {
            let outcome = if e.is_local() { "rejected" } else { "failure" };
            metrics::record_generation(capability, outcome, start.elapsed().as_secs_f64());
            warn!(capability = %capability, error = %e, "Generation dispatch failed");
            Err(e.into())
        }
    }
}
