//! Per-capability generation hints.
//!
//! These serialize directly into the model request body, so the enum variants
//! carry the exact strings the Gemini API expects.

use serde::{Deserialize, Serialize};

/// Content-safety category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
}

/// Blocking threshold for a safety category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

/// One safety setting forwarded with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmThreshold,
}

/// Grounding tool the model may use while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundingTool {
    /// Live web-search grounding.
    GoogleSearch,
    /// Fetch and read the URLs referenced in the prompt.
    UrlContext,
}

/// Auxiliary execution hints attached to one capability's requests.
///
/// Passed through to the external model, never interpreted locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    pub safety_settings: Vec<SafetySetting>,
    pub tools: Vec<GroundingTool>,
}

impl GenerationOptions {
    /// Safety thresholds for video analysis.
    pub fn video_analysis() -> Self {
        Self {
            safety_settings: vec![
                SafetySetting {
                    category: HarmCategory::HateSpeech,
                    threshold: HarmThreshold::BlockOnlyHigh,
                },
                SafetySetting {
                    category: HarmCategory::DangerousContent,
                    threshold: HarmThreshold::BlockNone,
                },
                SafetySetting {
                    category: HarmCategory::Harassment,
                    threshold: HarmThreshold::BlockMediumAndAbove,
                },
                SafetySetting {
                    category: HarmCategory::SexuallyExplicit,
                    threshold: HarmThreshold::BlockLowAndAbove,
                },
            ],
            tools: Vec::new(),
        }
    }

    /// Trend research runs with live web-search grounding.
    pub fn trend_research() -> Self {
        Self {
            safety_settings: Vec::new(),
            tools: vec![GroundingTool::GoogleSearch],
        }
    }

    /// Competitor analysis reads the submitted URLs.
    pub fn url_grounded() -> Self {
        Self {
            safety_settings: Vec::new(),
            tools: vec![GroundingTool::UrlContext],
        }
    }
}
