//! Generate-ideas capability contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for video idea brainstorming.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasInput {
    /// The main topic or keyword for the video ideas.
    #[validate(length(min = 2, message = "Topic must be at least 2 characters long."))]
    pub topic: String,

    /// The specific audience you want to reach.
    #[validate(length(min = 2, message = "Target audience must be at least 2 characters long."))]
    pub target_audience: String,

    /// The desired style of the video (e.g., educational, comedy, vlog, documentary).
    #[validate(length(min = 1, message = "Style is required."))]
    pub style: String,
}

/// One brainstormed video idea.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VideoIdea {
    /// A catchy, viral-potential title for the video.
    pub title: String,

    /// A brief but compelling concept for the video.
    pub concept: String,

    /// A strong opening hook to grab viewer attention in the first 3 seconds.
    pub hook: String,

    /// A score from 1-10 indicating the viral potential.
    #[schemars(range(min = 1, max = 10))]
    pub viral_potential: f64,

    /// A score from 1-10 indicating how well it matches the requested style and audience.
    #[schemars(range(min = 1, max = 10))]
    pub suitability_score: f64,
}

/// Output of video idea brainstorming.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateIdeasOutput {
    /// An array of creative video ideas.
    pub ideas: Vec<VideoIdea>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_min_length_two_on_topic_and_audience() {
        let input = GenerateIdeasInput {
            topic: "a".to_string(),
            target_audience: "b".to_string(),
            style: "Comedy".to_string(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("topic"));
        assert!(fields.contains_key("target_audience"));
        assert!(!fields.contains_key("style"));
    }

    #[test]
    fn test_valid_input() {
        let input = GenerateIdeasInput {
            topic: "urban beekeeping".to_string(),
            target_audience: "apartment gardeners".to_string(),
            style: "educational".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
