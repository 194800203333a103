//! Capability contracts for the ShortForge backend.
//!
//! Each capability declares a pair of record shapes:
//! - an input record with `validator` constraints, checked before dispatch
//! - an output record the external model must satisfy exactly
//!
//! Doc comments on output fields double as the semantic descriptions embedded
//! in the JSON Schema sent to the model, so the contract and the instruction
//! stay in one place.

pub mod accessibility;
pub mod analyze;
pub mod capability;
pub mod competitors;
pub mod ideas;
pub mod optimize;
pub mod repurpose;
pub mod script;
pub mod series;
pub mod timestamp;

// Re-export common types
pub use accessibility::{Caption, EnhanceAccessibilityInput, EnhanceAccessibilityOutput};
pub use analyze::{
    AnalyzeVideoInput, AnalyzeVideoOutput, TargetAudience, ViralMoment, VisualHighlight,
};
pub use capability::Capability;
pub use competitors::{
    AnalyzeCompetitorsInput, AnalyzeCompetitorsOutput, CompetitorRecommendation,
};
pub use ideas::{GenerateIdeasInput, GenerateIdeasOutput, VideoIdea};
pub use optimize::{OptimizeShortInput, OptimizeShortOutput};
pub use repurpose::{RepurposeContentInput, RepurposeContentOutput, RepurposeIdea};
pub use script::{GenerateScriptInput, GenerateScriptOutput, ScriptLine, ScriptPrefill};
pub use series::{BrandingElements, PlanSeriesInput, PlanSeriesOutput, SeriesEpisode};
pub use timestamp::{format_timestamp, parse_timestamp, TimestampError};
