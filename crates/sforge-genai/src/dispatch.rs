//! Thin per-capability dispatch methods.
//!
//! Each method trusts that the caller already validated the input record,
//! renders the capability's template, and performs the single external call.

use sforge_models::{
    AnalyzeCompetitorsInput, AnalyzeCompetitorsOutput, AnalyzeVideoInput, AnalyzeVideoOutput,
    Capability, EnhanceAccessibilityInput, EnhanceAccessibilityOutput, GenerateIdeasInput,
    GenerateIdeasOutput, GenerateScriptInput, GenerateScriptOutput, OptimizeShortInput,
    OptimizeShortOutput, PlanSeriesInput, PlanSeriesOutput, RepurposeContentInput,
    RepurposeContentOutput,
};
use sforge_prompts::{templates, GenerationOptions};

use crate::client::GeminiClient;
use crate::error::{GenAiError, GenAiResult};

impl GeminiClient {
    /// Analyze a video for viral moments, quotes, and audience fit.
    pub async fn analyze_video(
        &self,
        input: &AnalyzeVideoInput,
    ) -> GenAiResult<AnalyzeVideoOutput> {
        self.generate(
            Capability::AnalyzeVideo,
            templates::analyze_video(input),
            GenerationOptions::video_analysis(),
        )
        .await
    }

    /// Generate a second-by-second short script from a video segment.
    pub async fn generate_script(
        &self,
        input: &GenerateScriptInput,
    ) -> GenAiResult<GenerateScriptOutput> {
        self.generate(
            Capability::GenerateScript,
            templates::generate_script(input),
            GenerationOptions::default(),
        )
        .await
    }

    /// Optimize a short for current trends, with web-search grounding.
    pub async fn optimize_short(
        &self,
        input: &OptimizeShortInput,
    ) -> GenAiResult<OptimizeShortOutput> {
        self.generate(
            Capability::OptimizeShort,
            templates::optimize_short(input),
            GenerationOptions::trend_research(),
        )
        .await
    }

    /// Plan a multi-short series from a long-form video.
    pub async fn plan_series(&self, input: &PlanSeriesInput) -> GenAiResult<PlanSeriesOutput> {
        self.generate(
            Capability::PlanSeries,
            templates::plan_series(input),
            GenerationOptions::default(),
        )
        .await
    }

    /// Analyze competitor content, with URL-context grounding.
    pub async fn analyze_competitors(
        &self,
        input: &AnalyzeCompetitorsInput,
    ) -> GenAiResult<AnalyzeCompetitorsOutput> {
        self.generate(
            Capability::AnalyzeCompetitors,
            templates::analyze_competitors(input),
            GenerationOptions::url_grounded(),
        )
        .await
    }

    /// Repurpose an article or raw text into short video ideas.
    ///
    /// Fails fast if neither a URL nor text was supplied, before any
    /// external call.
    pub async fn repurpose_content(
        &self,
        input: &RepurposeContentInput,
    ) -> GenAiResult<RepurposeContentOutput> {
        if input.is_empty() {
            return Err(GenAiError::Precondition(
                "Either a content URL or content text must be provided.".to_string(),
            ));
        }

        self.generate(
            Capability::RepurposeContent,
            templates::repurpose_content(input),
            GenerationOptions::default(),
        )
        .await
    }

    /// Brainstorm video ideas for a topic, audience, and style.
    pub async fn generate_ideas(
        &self,
        input: &GenerateIdeasInput,
    ) -> GenAiResult<GenerateIdeasOutput> {
        self.generate(
            Capability::GenerateIdeas,
            templates::generate_ideas(input),
            GenerationOptions::default(),
        )
        .await
    }

    /// Enhance a short for accessibility and localization.
    pub async fn enhance_accessibility(
        &self,
        input: &EnhanceAccessibilityInput,
    ) -> GenAiResult<EnhanceAccessibilityOutput> {
        self.generate(
            Capability::EnhanceAccessibility,
            templates::enhance_accessibility(input),
            GenerationOptions::default(),
        )
        .await
    }
}
