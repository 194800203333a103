//! Idea brainstorming page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{Capability, GenerateIdeasInput, GenerateIdeasOutput};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Brainstorm video ideas for a topic, audience, and style.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasInput>,
) -> ApiResult<Json<GenerateIdeasOutput>> {
    request.validate()?;
    run_generation(Capability::GenerateIdeas, state.genai.generate_ideas(&request)).await
}
