//! Script generation page handler, including the prefill hand-off.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use sforge_models::{Capability, GenerateScriptInput, GenerateScriptOutput, ScriptPrefill};

use crate::error::ApiResult;
use crate::handlers::run_generation;
use crate::state::AppState;

/// Generate a second-by-second short script from a video segment.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(request): Json<GenerateScriptInput>,
) -> ApiResult<Json<GenerateScriptOutput>> {
    request.validate()?;
    run_generation(
        Capability::GenerateScript,
        state.genai.generate_script(&request),
    )
    .await
}

/// Navigation intent carried from another capability's result, e.g. the
/// analyze page's "Generate Script" action on a chosen moment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillQuery {
    pub video_url: Option<String>,
    pub start_time: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
}

/// Resolve initial script form values from a navigation intent.
pub async fn script_prefill(Query(query): Query<PrefillQuery>) -> Json<ScriptPrefill> {
    Json(ScriptPrefill::from_intent(
        query.video_url,
        query.start_time,
        query.duration,
        query.category,
    ))
}
