//! Gemini REST client.

use reqwest::Client;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use sforge_models::Capability;
use sforge_prompts::{GenerationOptions, GroundingTool, SafetySetting};

use crate::contract;
use crate::error::{GenAiError, GenAiResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// External model configuration.
///
/// No local request timeout is set; transport behavior is whatever the HTTP
/// client's defaults provide.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key for the hosted model service.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Service base URL. Overridable so tests can point at a local mock.
    pub base_url: String,
}

impl GenAiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> GenAiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| GenAiError::MissingApiKey)?;
        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// Gemini API client.
pub struct GeminiClient {
    config: GenAiConfig,
    client: Client,
}

/// Gemini API request.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings", skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

/// Gemini API response.
#[derive(Debug, serde::Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, serde::Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, serde::Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Model identifier this client dispatches to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Check that the model service endpoint is reachable.
    ///
    /// Any HTTP response counts as reachable; only transport failures are
    /// errors.
    pub async fn check_connectivity(&self) -> GenAiResult<()> {
        self.client.get(&self.config.base_url).send().await?;
        Ok(())
    }

    /// Perform exactly one generation call and parse the response into the
    /// capability's output contract.
    pub async fn generate<O>(
        &self,
        capability: Capability,
        prompt: String,
        options: GenerationOptions,
    ) -> GenAiResult<O>
    where
        O: DeserializeOwned + JsonSchema,
    {
        let schema = contract::output_schema::<O>();

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(schema.clone()),
            },
            safety_settings: options.safety_settings,
            tools: options.tools.iter().map(tool_spec).collect(),
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        info!(capability = %capability, model = %self.config.model, "Dispatching generation request");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(capability = %capability, status, "Model returned error status");
            return Err(GenAiError::Remote { status, body });
        }

        let envelope: GeminiResponse = response
            .json()
            .await
            .map_err(GenAiError::Transport)?;

        let text = envelope
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or(GenAiError::EmptyResponse)?;

        let payload: Value = serde_json::from_str(strip_code_fences(text))
            .map_err(GenAiError::InvalidJson)?;

        contract::strict_parse(capability, &schema, payload)
    }
}

/// Strip a markdown code fence the model may wrap JSON in.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Wire form of a grounding tool declaration.
fn tool_spec(tool: &GroundingTool) -> Value {
    match tool {
        GroundingTool::GoogleSearch => serde_json::json!({ "google_search": {} }),
        GroundingTool::UrlContext => serde_json::json!({ "url_context": {} }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_tool_spec_wire_format() {
        assert_eq!(
            tool_spec(&GroundingTool::GoogleSearch),
            serde_json::json!({ "google_search": {} })
        );
        assert_eq!(
            tool_spec(&GroundingTool::UrlContext),
            serde_json::json!({ "url_context": {} })
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = GenAiConfig {
            api_key: "k".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.base_url.starts_with("https://"));
    }
}
