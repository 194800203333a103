//! Generate-script capability contract, plus the prefill hand-off record.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::timestamp::{format_timestamp, parse_timestamp};

/// Clock-style segment timestamp (`m:ss` or `mm:ss`).
static CLIP_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap());

/// Unanchored variant for pulling a time out of free-form intent values
/// such as "0:45 - 0:57".
static TIME_SCAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").unwrap());

/// Input for short script generation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScriptInput {
    /// The URL of the original YouTube video.
    #[validate(url(message = "Please enter a valid YouTube URL."))]
    pub video_url: String,

    /// The start timestamp of the video segment (e.g., 0:15).
    #[validate(
        length(min = 1, message = "Start time is required."),
        regex(path = *CLIP_TIME_RE, message = "Use m:ss or mm:ss format")
    )]
    pub start_time: String,

    /// The end timestamp of the video segment (e.g., 0:30).
    #[validate(
        length(min = 1, message = "End time is required."),
        regex(path = *CLIP_TIME_RE, message = "Use m:ss or mm:ss format")
    )]
    pub end_time: String,

    /// The category of the video (e.g., tech, lifestyle, education).
    #[validate(length(min = 2, message = "Category is required."))]
    pub category: String,

    /// The target duration of the short in seconds (e.g., 15, 30, 60).
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
}

/// One entry in the second-by-second script breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScriptLine {
    /// The timestamp in the short (e.g., 0:00).
    pub timestamp: String,

    /// The narration for this timestamp.
    pub narration: String,

    /// The text overlay to display at this timestamp.
    pub text_overlay: String,

    /// Visual direction for this timestamp (e.g., zoom in, transition).
    pub visual_direction: String,

    /// Audio notes for this timestamp (e.g., background music, sound effect).
    pub audio_note: String,
}

/// Output of short script generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateScriptOutput {
    /// The title of the short.
    pub title: String,

    /// A brief description of the short.
    pub description: String,

    /// An attention-grabbing opening line for the short.
    pub hook: String,

    /// A second-by-second breakdown of the short script.
    pub script: Vec<ScriptLine>,

    /// An engaging end screen text for the short.
    pub call_to_action: String,

    /// Questions to drive engagement in the comments.
    pub engagement_questions: Vec<String>,

    /// Suggested background music style (e.g., trending, upbeat, dramatic).
    pub suggested_music: String,

    /// Estimated view count.
    pub estimated_views: String,
}

/// Initial form values carried from another capability's result.
///
/// The analyze page's "Generate Script" action hands a chosen moment to the
/// script form. The hand-off is one-way and one-time: the prefill is derived
/// once from the navigation intent and the pages stay otherwise uncoupled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPrefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Derived from start time plus duration when both are usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl ScriptPrefill {
    /// Build prefill values from a navigation intent.
    ///
    /// `start_time` is taken only when it matches the `m:ss` shape the form
    /// accepts. The segment end is start plus duration; when a start time is
    /// present but the duration is unusable, the end falls back to `0:15`.
    pub fn from_intent(
        video_url: Option<String>,
        start_time: Option<String>,
        duration: Option<String>,
        category: Option<String>,
    ) -> Self {
        let start_time = start_time.and_then(|raw| {
            TIME_SCAN_RE
                .find(&raw)
                .map(|m| m.as_str().to_string())
        });

        let end_time = start_time.as_ref().map(|start| {
            let derived = duration
                .as_ref()
                .and_then(|d| d.parse::<u64>().ok())
                .and_then(|secs| {
                    parse_timestamp(start)
                        .ok()
                        .map(|s| format_timestamp(s as u64 + secs))
                });
            derived.unwrap_or_else(|| "0:15".to_string())
        });

        Self {
            video_url,
            start_time,
            end_time,
            category,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_input() -> GenerateScriptInput {
        GenerateScriptInput {
            video_url: "https://youtu.be/abc123".to_string(),
            start_time: "0:15".to_string(),
            end_time: "0:30".to_string(),
            category: "tech".to_string(),
            duration: "15".to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_time_format() {
        let mut input = valid_input();
        input.start_time = "15 seconds".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("start_time"));
    }

    #[test]
    fn test_rejects_short_category() {
        let mut input = valid_input();
        input.category = "t".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn test_prefill_derives_end_time() {
        let prefill = ScriptPrefill::from_intent(
            Some("https://youtu.be/abc123".to_string()),
            Some("0:45".to_string()),
            Some("12".to_string()),
            None,
        );
        assert_eq!(prefill.start_time.as_deref(), Some("0:45"));
        assert_eq!(prefill.end_time.as_deref(), Some("0:57"));
        assert_eq!(prefill.duration.as_deref(), Some("12"));
    }

    #[test]
    fn test_prefill_end_time_fallback() {
        let prefill = ScriptPrefill::from_intent(
            None,
            Some("1:30".to_string()),
            Some("a while".to_string()),
            None,
        );
        assert_eq!(prefill.end_time.as_deref(), Some("0:15"));
    }

    #[test]
    fn test_prefill_ignores_unparseable_start() {
        let prefill =
            ScriptPrefill::from_intent(None, Some("later".to_string()), Some("12".to_string()), None);
        assert!(prefill.start_time.is_none());
        assert!(prefill.end_time.is_none());
    }

    #[test]
    fn test_prefill_extracts_time_from_range() {
        // Moment timestamps sometimes arrive as "0:45 - 0:57"
        let prefill =
            ScriptPrefill::from_intent(None, Some("0:45 - 0:57".to_string()), None, None);
        assert_eq!(prefill.start_time.as_deref(), Some("0:45"));
    }
}
