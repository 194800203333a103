//! Enhance-accessibility capability contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for accessibility enhancement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceAccessibilityInput {
    /// The content of the short video.
    #[validate(length(
        min = 10,
        message = "Please enter the script or content of your short video."
    ))]
    pub short_content: String,
}

/// One timed caption.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Caption {
    /// The start time of the caption.
    pub start_time: String,

    /// The end time of the caption.
    pub end_time: String,

    /// The caption text.
    pub text: String,
}

/// Output of accessibility enhancement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnhanceAccessibilityOutput {
    /// Generated captions for the short.
    pub captions: Vec<Caption>,

    /// Key target languages based on content.
    pub target_languages: Vec<String>,

    /// Score representing the accessibility of the short.
    #[schemars(range(min = 0, max = 100))]
    pub accessibility_score: f64,

    /// Recommendations for improving accessibility.
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_rejects_thin_content() {
        let input = EnhanceAccessibilityInput {
            short_content: "hi".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("short_content"));
    }

    #[test]
    fn test_score_bounds_in_schema() {
        let schema = schemars::schema_for!(EnhanceAccessibilityOutput);
        let json = serde_json::to_value(&schema).unwrap();
        let score = &json["properties"]["accessibilityScore"];
        assert_eq!(score["minimum"], serde_json::json!(0.0));
        assert_eq!(score["maximum"], serde_json::json!(100.0));
    }
}
