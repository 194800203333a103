//! Analyze-competitors capability contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

/// Input for competitor analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCompetitorsInput {
    /// URLs of competitor content to analyze.
    #[validate(
        length(min = 1, message = "Add at least one competitor URL."),
        custom(function = "validate_url_items")
    )]
    pub competitor_urls: Vec<String>,

    /// URL of the user's video.
    #[validate(url(message = "Please enter a valid URL for your video."))]
    pub my_video_url: String,
}

/// Every entry must parse as an http(s) URL.
fn validate_url_items(urls: &Vec<String>) -> Result<(), ValidationError> {
    for raw in urls {
        let parsed = Url::parse(raw).map_err(|_| {
            ValidationError::new("url").with_message("Please enter a valid URL.".into())
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::new("url")
                .with_message("Please enter a valid URL.".into()));
        }
    }
    Ok(())
}

/// One actionable recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompetitorRecommendation {
    /// Category of recommendation.
    pub category: String,

    /// Specific suggestion for improvement.
    pub suggestion: String,

    /// Priority level of the suggestion.
    pub priority: String,
}

/// Output of competitor analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzeCompetitorsOutput {
    /// Identified content gaps in competitor content.
    pub content_gaps: Vec<String>,

    /// Identified success patterns in competitor content.
    pub success_patterns: Vec<String>,

    /// Unique angles to differentiate content.
    pub unique_angles: Vec<String>,

    /// Audience insights derived from competitor content.
    pub audience_insights: Vec<String>,

    /// Actionable recommendations for improvement.
    pub recommendations: Vec<CompetitorRecommendation>,
}
