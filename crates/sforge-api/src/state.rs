//! Application state.

use std::sync::Arc;

use sforge_genai::{GeminiClient, GenAiConfig};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub genai: Arc<GeminiClient>,
}

impl AppState {
    /// Create application state from environment configuration.
    pub fn from_env() -> ApiResult<Self> {
        let config = ApiConfig::from_env();
        let genai_config = GenAiConfig::from_env().map_err(|e| ApiError::internal(e.to_string()))?;
        Ok(Self::new(config, genai_config))
    }

    /// Create application state with explicit configuration.
    pub fn new(config: ApiConfig, genai_config: GenAiConfig) -> Self {
        Self {
            config,
            genai: Arc::new(GeminiClient::new(genai_config)),
        }
    }
}
