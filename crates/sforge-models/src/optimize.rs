//! Optimize-for-trends capability contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for trend optimization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeShortInput {
    /// Details of the short to optimize.
    #[validate(length(min = 10, message = "Please describe your short video."))]
    pub short_details: String,

    /// The category of the short.
    #[validate(length(min = 2, message = "Please enter a category."))]
    pub category: String,
}

/// Output of trend optimization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptimizeShortOutput {
    /// Top trending topics in the short category.
    pub trending_topics: Vec<String>,

    /// Attention-grabbing titles for the short.
    pub optimized_titles: Vec<String>,

    /// Bold text for the thumbnail.
    pub thumbnail_text: Vec<String>,

    /// SEO-optimized description for the short.
    pub description: String,

    /// Relevant hashtags for the short.
    pub hashtags: Vec<String>,

    /// Best time to post the short.
    pub posting_time: String,

    /// Trending audio tracks for shorts.
    pub trending_music: Vec<String>,

    /// Unique angles for the short.
    pub unique_angles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_rejects_thin_details() {
        let input = OptimizeShortInput {
            short_details: "too short".to_string(),
            category: "tech".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("short_details"));
    }

    #[test]
    fn test_valid_input() {
        let input = OptimizeShortInput {
            short_details: "A 30-second knife skills demo with quick cuts.".to_string(),
            category: "cooking".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
