//! Video analysis page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{AnalyzeVideoInput, AnalyzeVideoOutput, Capability};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Analyze a video for viral moments, quotes, and audience fit.
pub async fn analyze_video(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeVideoInput>,
) -> ApiResult<Json<AnalyzeVideoOutput>> {
    request.validate()?;
    run_generation(Capability::AnalyzeVideo, state.genai.analyze_video(&request)).await
}
