//! Trend optimization page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{Capability, OptimizeShortInput, OptimizeShortOutput};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Optimize a short for current trends.
pub async fn optimize_short(
    State(state): State<AppState>,
    Json(request): Json<OptimizeShortInput>,
) -> ApiResult<Json<OptimizeShortOutput>> {
    request.validate()?;
    run_generation(Capability::OptimizeShort, state.genai.optimize_short(&request)).await
}
