//! Plan-series capability contract.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Video duration in `m:ss` shape (minutes may exceed two digits, e.g. 125:47).
static VIDEO_DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+:\d{2}$").unwrap());

/// Input for multi-short series planning.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanSeriesInput {
    /// The URL of the long-form video to analyze.
    #[validate(url(message = "Please enter a valid YouTube URL."))]
    pub video_url: String,

    /// The duration of the video.
    #[validate(
        length(min = 1, message = "Please enter the video duration, e.g., 25:47"),
        regex(path = *VIDEO_DURATION_RE, message = "Use m:ss format")
    )]
    pub duration: String,
}

/// One planned short in the series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeriesEpisode {
    /// The episode number in the series.
    pub episode_number: u32,

    /// The title of the short.
    pub title: String,

    /// The start time of the short in the original video.
    pub start_time: String,

    /// The end time of the short in the original video.
    pub end_time: String,

    /// A compelling hook for the short.
    pub hook: String,

    /// The main point of the short.
    pub main_point: String,

    /// A cliffhanger to drive viewers to the next video.
    pub cliffhanger: String,

    /// The recommended date and time to post the short.
    pub posting_date_time: String,
}

/// Branding elements shared across the series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BrandingElements {
    /// The color scheme for the series branding.
    pub color_scheme: String,

    /// The font style for the series branding.
    pub font_style: String,

    /// The intro style for the series branding.
    pub intro_style: String,
}

/// Output of multi-short series planning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanSeriesOutput {
    /// The title of the multi-short series.
    pub series_title: String,

    /// An array of short plans for the series.
    pub shorts: Vec<SeriesEpisode>,

    /// The branding elements for the series.
    pub branding_elements: BrandingElements,

    /// An array of engagement tactics for the series.
    pub engagement_tactics: Vec<String>,
}
