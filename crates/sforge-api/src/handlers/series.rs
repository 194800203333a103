//! Series planning page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{Capability, PlanSeriesInput, PlanSeriesOutput};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Plan a multi-short series from a long-form video.
pub async fn plan_series(
    State(state): State<AppState>,
    Json(request): Json<PlanSeriesInput>,
) -> ApiResult<Json<PlanSeriesOutput>> {
    request.validate()?;
    run_generation(Capability::PlanSeries, state.genai.plan_series(&request)).await
}
