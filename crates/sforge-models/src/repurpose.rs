//! Repurpose-content capability contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for content repurposing. At least one of `content_url` or
/// `content_text` must be supplied; the dispatcher rejects the request
/// before any external call otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RepurposeContentInput {
    /// The URL of the article or blog post to repurpose.
    #[validate(url(message = "Please enter a valid URL."))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    /// The raw text of the content to repurpose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
}

impl RepurposeContentInput {
    /// True when neither a URL nor raw text was supplied.
    pub fn is_empty(&self) -> bool {
        let no_url = self.content_url.as_deref().map_or(true, str::is_empty);
        let no_text = self.content_text.as_deref().map_or(true, str::is_empty);
        no_url && no_text
    }
}

/// One short-form video idea derived from the source content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepurposeIdea {
    /// A catchy title for the short video.
    pub title: String,

    /// The suggested format (e.g., Talking Head, Tutorial, Listicle, Myth Busting).
    pub format: String,

    /// A strong opening hook for the video.
    pub hook: String,

    /// The specific angle or snippet from the original content to focus on.
    pub content_angle: String,
}

/// Output of content repurposing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepurposeContentOutput {
    /// The most important points extracted from the content.
    pub key_takeaways: Vec<String>,

    /// An array of short-form video ideas based on the content.
    pub video_ideas: Vec<RepurposeIdea>,
}
