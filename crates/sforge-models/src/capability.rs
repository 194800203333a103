//! Capability identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One discrete AI-assisted operation with its own input/output contract,
/// prompt template, and dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Analyze a video for viral moments and audience fit
    AnalyzeVideo,
    /// Generate a second-by-second short script from a video segment
    GenerateScript,
    /// Optimize a short for current trends
    OptimizeShort,
    /// Plan a multi-short series from a long-form video
    PlanSeries,
    /// Analyze competitor content for strategic advantages
    AnalyzeCompetitors,
    /// Repurpose an article or raw text into short video ideas
    RepurposeContent,
    /// Brainstorm video ideas for a topic, audience, and style
    GenerateIdeas,
    /// Enhance a short for accessibility and localization
    EnhanceAccessibility,
}

impl Capability {
    /// Returns the capability as a stable string for logs and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyzeVideo => "analyze_video",
            Self::GenerateScript => "generate_script",
            Self::OptimizeShort => "optimize_short",
            Self::PlanSeries => "plan_series",
            Self::AnalyzeCompetitors => "analyze_competitors",
            Self::RepurposeContent => "repurpose_content",
            Self::GenerateIdeas => "generate_ideas",
            Self::EnhanceAccessibility => "enhance_accessibility",
        }
    }

    /// All capabilities, in the order the navigation presents them.
    pub fn all() -> &'static [Capability] {
        &[
            Self::AnalyzeVideo,
            Self::GenerateScript,
            Self::OptimizeShort,
            Self::PlanSeries,
            Self::AnalyzeCompetitors,
            Self::RepurposeContent,
            Self::GenerateIdeas,
            Self::EnhanceAccessibility,
        ]
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_round_trip() {
        for cap in Capability::all() {
            let json = serde_json::to_string(cap).unwrap();
            let back: Capability = serde_json::from_str(&json).unwrap();
            assert_eq!(*cap, back);
        }
    }

    #[test]
    fn test_capability_as_str_matches_serde() {
        let json = serde_json::to_string(&Capability::AnalyzeVideo).unwrap();
        assert_eq!(json, "\"analyze_video\"");
        assert_eq!(Capability::AnalyzeVideo.as_str(), "analyze_video");
    }
}
