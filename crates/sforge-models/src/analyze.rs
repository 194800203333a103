//! Analyze-video capability contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for video analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeVideoInput {
    /// The URL of the YouTube video to analyze.
    #[validate(url(message = "Please enter a valid YouTube URL."))]
    pub video_url: String,
}

/// A potential viral moment with timestamp and reasoning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ViralMoment {
    /// The timestamp of the viral moment.
    pub timestamp: String,

    /// The duration of the viral moment.
    pub duration: String,

    /// A description of the viral moment.
    pub description: String,

    /// The reason why this moment is engaging.
    pub hook_reason: String,

    /// A score indicating the viral potential (1-10).
    #[schemars(range(min = 1, max = 10))]
    pub viral_score: f64,
}

/// A visually striking moment identified in the video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VisualHighlight {
    /// The timestamp of the visual highlight.
    pub timestamp: String,

    /// A description of the visual highlight.
    pub description: String,
}

/// Details about the target audience.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetAudience {
    /// The primary demographic of the target audience.
    pub demographic: String,

    /// The ideal short duration (15s, 30s, 60s).
    pub recommended_duration: String,

    /// Recommended hashtags for the short.
    pub hashtags: Vec<String>,
}

/// Output of video analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzeVideoOutput {
    /// A brief summary of the video content.
    pub summary: String,

    /// List of potential viral moments with timestamps and descriptions.
    pub viral_moments: Vec<ViralMoment>,

    /// Memorable quotes extracted from the video.
    pub key_quotes: Vec<String>,

    /// Visually striking moments identified in the video.
    pub visual_highlights: Vec<VisualHighlight>,

    /// Details about the target audience.
    pub target_audience: TargetAudience,
}
