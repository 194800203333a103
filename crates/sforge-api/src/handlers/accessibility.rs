//! Accessibility enhancement page handler.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use sforge_models::{Capability, EnhanceAccessibilityInput, EnhanceAccessibilityOutput};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Enhance a short for accessibility and localization.
pub async fn enhance_accessibility(
    State(state): State<AppState>,
    Json(request): Json<EnhanceAccessibilityInput>,
) -> ApiResult<Json<EnhanceAccessibilityOutput>> {
    request.validate()?;
    run_generation(
        Capability::EnhanceAccessibility,
        state.genai.enhance_accessibility(&request),
    )
    .await
}
