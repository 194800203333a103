//! Content repurposing page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{Capability, RepurposeContentInput, RepurposeContentOutput};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Repurpose an article or raw text into short video ideas.
///
/// The dispatcher rejects the request before any external call when neither
/// a URL nor raw text was supplied.
pub async fn repurpose_content(
    State(state): State<AppState>,
    Json(request): Json<RepurposeContentInput>,
) -> ApiResult<Json<RepurposeContentOutput>> {
    request.validate()?;
    run_generation(
        Capability::RepurposeContent,
        state.genai.repurpose_content(&request),
    )
    .await
}
