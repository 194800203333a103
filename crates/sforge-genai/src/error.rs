//! Dispatch error types.

use sforge_models::Capability;
use thiserror::Error;

pub type GenAiResult<T> = Result<T, GenAiError>;

/// Failure modes of one external-model call.
#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// Capability-specific required combination not met; no call was made.
    #[error("{0}")]
    Precondition(String),

    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("model response contained no content")]
    EmptyResponse,

    #[error("model response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The response parsed as JSON but does not satisfy the declared
    /// output contract.
    #[error("model response does not satisfy the {capability} contract: {details}")]
    ContractViolation {
        capability: Capability,
        details: String,
    },
}

impl GenAiError {
    /// True for failures raised before any external call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::Precondition(_))
    }
}
