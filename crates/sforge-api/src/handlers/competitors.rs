//! Competitor analysis page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{AnalyzeCompetitorsInput, AnalyzeCompetitorsOutput, Capability};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Analyze competitor content for strategic advantages.
pub async fn analyze_competitors(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeCompetitorsInput>,
) -> ApiResult<Json<AnalyzeCompetitorsOutput>> {
    request.validate()?;
    run_generation(
        Capability::AnalyzeCompetitors,
        state.genai.analyze_competitors(&request),
    )
    .await
}
