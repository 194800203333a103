//! Gemini client and per-capability request dispatch.
//!
//! One submission performs at most one external call: the dispatcher renders
//! the capability's template, posts it with the declared output schema, and
//! strictly parses the response. There are no retries, no model fallback, and
//! no caching; a response that does not satisfy the contract fails the whole
//! operation.

pub mod client;
pub mod contract;
pub mod dispatch;
pub mod error;

pub use client::{GeminiClient, GenAiConfig};
pub use error::{GenAiError, GenAiResult};
