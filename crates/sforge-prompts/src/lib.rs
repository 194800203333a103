//! Prompt templates and generation hints for ShortForge capabilities.
//!
//! Each template is a pure function of its input record: it interpolates the
//! record's fields verbatim into a fixed instruction string. The only
//! branching is conditional inclusion of optional blocks (repurpose includes
//! a URL block or a text block depending on what was supplied).
//!
//! Generation hints (content-safety thresholds, grounding tools) are opaque
//! configuration the dispatcher forwards to the model untouched.

pub mod config;
pub mod templates;

pub use config::{
    GenerationOptions, GroundingTool, HarmCategory, HarmThreshold, SafetySetting,
};
