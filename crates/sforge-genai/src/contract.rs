//! Strict output-contract parsing.
//!
//! A model response must satisfy the declared contract exactly: every
//! required field present, types matching, score bounds respected, and no
//! unknown fields. Anything else fails the whole call; there is no
//! best-effort coercion and no partial result.

use jsonschema::JSONSchema;
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use sforge_models::Capability;

use crate::error::{GenAiError, GenAiResult};

/// JSON Schema for an output contract, as sent to the model and used for
/// response validation.
pub fn output_schema<O: JsonSchema>() -> Value {
    let schema = SchemaSettings::draft07()
        .into_generator()
        .into_root_schema_for::<O>();
    serde_json::to_value(schema).expect("contract schema serializes")
}

/// Validate a payload against the contract schema, then deserialize it.
///
/// Schema validation runs first and reports all violations (missing fields,
/// out-of-range scores, unknown fields) together.
pub fn strict_parse<O: DeserializeOwned>(
    capability: Capability,
    schema: &Value,
    payload: Value,
) -> GenAiResult<O> {
    let compiled = JSONSchema::compile(schema).map_err(|e| GenAiError::ContractViolation {
        capability,
        details: format!("contract schema failed to compile: {}", e),
    })?;

    if let Err(violations) = compiled.validate(&payload) {
        let details = violations
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GenAiError::ContractViolation {
            capability,
            details,
        });
    }

    serde_json::from_value(payload).map_err(|e| GenAiError::ContractViolation {
        capability,
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sforge_models::{AnalyzeVideoOutput, GenerateIdeasOutput};

    fn analyze_payload() -> Value {
        json!({
            "summary": "A cooking tutorial.",
            "viralMoments": [{
                "timestamp": "0:45",
                "duration": "12",
                "description": "knife trick",
                "hookReason": "surprising",
                "viralScore": 9
            }],
            "keyQuotes": ["Sharp knives are safe knives."],
            "visualHighlights": [{ "timestamp": "1:02", "description": "slow-motion chop" }],
            "targetAudience": {
                "demographic": "home cooks, 25-40",
                "recommendedDuration": "30s",
                "hashtags": ["#cooking", "#knifeskills"]
            }
        })
    }

    #[test]
    fn test_exact_payload_parses() {
        let schema = output_schema::<AnalyzeVideoOutput>();
        let parsed: AnalyzeVideoOutput =
            strict_parse(Capability::AnalyzeVideo, &schema, analyze_payload()).unwrap();
        assert_eq!(parsed.viral_moments.len(), 1);
        assert_eq!(parsed.viral_moments[0].viral_score, 9.0);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let schema = output_schema::<AnalyzeVideoOutput>();
        let mut payload = analyze_payload();
        payload.as_object_mut().unwrap().remove("summary");
        let err = strict_parse::<AnalyzeVideoOutput>(Capability::AnalyzeVideo, &schema, payload)
            .unwrap_err();
        assert!(matches!(err, GenAiError::ContractViolation { .. }));
    }

    #[test]
    fn test_unknown_field_fails() {
        let schema = output_schema::<AnalyzeVideoOutput>();
        let mut payload = analyze_payload();
        payload
            .as_object_mut()
            .unwrap()
            .insert("confidence".to_string(), json!(0.9));
        assert!(
            strict_parse::<AnalyzeVideoOutput>(Capability::AnalyzeVideo, &schema, payload).is_err()
        );
    }

    #[test]
    fn test_numeric_string_is_not_coerced() {
        let schema = output_schema::<AnalyzeVideoOutput>();
        let mut payload = analyze_payload();
        payload["viralMoments"][0]["viralScore"] = json!("9");
        assert!(
            strict_parse::<AnalyzeVideoOutput>(Capability::AnalyzeVideo, &schema, payload).is_err()
        );
    }

    #[test]
    fn test_out_of_range_score_fails() {
        let schema = output_schema::<GenerateIdeasOutput>();
        let payload = json!({
            "ideas": [{
                "title": "t",
                "concept": "c",
                "hook": "h",
                "viralPotential": 11,
                "suitabilityScore": 5
            }]
        });
        let err = strict_parse::<GenerateIdeasOutput>(Capability::GenerateIdeas, &schema, payload)
            .unwrap_err();
        match err {
            GenAiError::ContractViolation { details, .. } => {
                assert!(details.contains("11"), "details: {}", details);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
