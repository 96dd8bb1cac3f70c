//! Prompt and schema construction for LLM-backed career guidance.
//!
//! The engine never talks to a model itself; it builds a deterministic
//! prompt plus a JSON schema for the caller to send, and parses the JSON
//! payload that comes back into typed guidance.

use serde_json::{json, Value};
use skillpilot_types::{GuidanceRequest, GuidanceResponse};
use thiserror::Error;

/// Failure to interpret an LLM guidance payload.
#[derive(Debug, Error)]
pub enum GuidanceError {
    /// The payload was not valid JSON or did not match the response shape.
    #[error("invalid guidance payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// A ready-to-send guidance prompt with its response schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidancePrompt {
    /// The prompt text.
    pub prompt: String,
    /// JSON schema the model's reply must match.
    pub schema: Value,
}

/// Build the guidance prompt and response schema for a request.
pub fn build_guidance_prompt(request: &GuidanceRequest) -> GuidancePrompt {
    let existing = if request.existing_skills.is_empty() {
        "none".to_string()
    } else {
        request.existing_skills.join(", ")
    };
    let timeline = request
        .timeline_weeks
        .map(|weeks| weeks.to_string())
        .unwrap_or_else(|| "unspecified".to_string());
    let preferences = if request.preferences.is_empty() {
        "none".to_string()
    } else {
        request.preferences.join(", ")
    };

    let prompt = [
        "You are an AI career guidance assistant.".to_string(),
        "Return ONLY valid JSON that matches the provided schema.".to_string(),
        format!("User goal: {}", request.user_goal),
        format!("Existing skills: {existing}"),
        format!("Timeline weeks: {timeline}"),
        format!("Preferences: {preferences}"),
    ]
    .join("\n");

    GuidancePrompt {
        prompt,
        schema: response_schema(),
    }
}

/// Parse an LLM JSON payload into structured guidance.
pub fn parse_guidance_response(payload: &str) -> Result<GuidanceResponse, GuidanceError> {
    Ok(serde_json::from_str(payload)?)
}

fn response_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "suggestedSkills": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "category": { "type": "string" },
                        "estimatedWeeks": { "type": "number" },
                        "priority": { "type": "string", "enum": ["high", "medium", "low"] },
                        "reason": { "type": "string" }
                    },
                    "required": [
                        "name", "description", "category",
                        "estimatedWeeks", "priority", "reason"
                    ],
                    "additionalProperties": false
                }
            },
            "suggestedDeadline": { "type": "string" },
            "priorityNotes": { "type": "array", "items": { "type": "string" } },
            "conflicts": {
                "type": "object",
                "properties": {
                    "hasConflicts": { "type": "boolean" },
                    "conflicts": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "type": { "type": "string" },
                                "description": { "type": "string" },
                                "severity": { "type": "string" },
                                "suggestion": { "type": "string" }
                            },
                            "required": ["type", "description", "severity", "suggestion"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["hasConflicts", "conflicts"],
                "additionalProperties": false
            }
        },
        "required": ["suggestedSkills", "priorityNotes", "conflicts"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpilot_types::ConflictAnalysis;

    fn request() -> GuidanceRequest {
        GuidanceRequest {
            user_goal: "Become a data scientist".to_string(),
            existing_skills: vec!["Python".to_string(), "SQL".to_string()],
            timeline_weeks: Some(24),
            preferences: vec![],
        }
    }

    #[test]
    fn test_prompt_contains_request_fields() {
        let built = build_guidance_prompt(&request());
        assert!(built.prompt.contains("User goal: Become a data scientist"));
        assert!(built.prompt.contains("Existing skills: Python, SQL"));
        assert!(built.prompt.contains("Timeline weeks: 24"));
        assert!(built.prompt.contains("Preferences: none"));
    }

    #[test]
    fn test_prompt_placeholders_for_absent_fields() {
        let built = build_guidance_prompt(&GuidanceRequest {
            user_goal: "Switch careers".to_string(),
            existing_skills: vec![],
            timeline_weeks: None,
            preferences: vec![],
        });
        assert!(built.prompt.contains("Existing skills: none"));
        assert!(built.prompt.contains("Timeline weeks: unspecified"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_guidance_prompt(&request()), build_guidance_prompt(&request()));
    }

    #[test]
    fn test_schema_requires_core_fields() {
        let built = build_guidance_prompt(&request());
        let required = built.schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "suggestedSkills"));
        assert!(required.iter().any(|v| v == "conflicts"));
        // suggestedDeadline is optional.
        assert!(!required.iter().any(|v| v == "suggestedDeadline"));
    }

    #[test]
    fn test_parse_roundtrips_our_own_types() {
        let response = GuidanceResponse {
            suggested_skills: vec![],
            suggested_deadline: Some("2026-12-31".to_string()),
            priority_notes: vec!["Start with statistics".to_string()],
            conflicts: ConflictAnalysis::default(),
        };
        let payload = serde_json::to_string(&response).unwrap();
        let parsed = parse_guidance_response(&payload).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_parse_valid_payload() {
        let payload = r#"{
            "suggestedSkills": [{
                "name": "Statistics",
                "description": "Statistical analysis fundamentals",
                "category": "Math",
                "estimatedWeeks": 6,
                "priority": "high",
                "reason": "Foundation for data analysis"
            }],
            "priorityNotes": [],
            "conflicts": { "hasConflicts": false, "conflicts": [] }
        }"#;
        let parsed = parse_guidance_response(payload).unwrap();
        assert_eq!(parsed.suggested_skills.len(), 1);
        assert_eq!(parsed.suggested_skills[0].name, "Statistics");
        assert_eq!(parsed.suggested_deadline, None);
    }

    #[test]
    fn test_parse_rejects_malformed_payload() {
        assert!(parse_guidance_response("not json").is_err());
        assert!(parse_guidance_response("{}").is_err());
        let err = parse_guidance_response("{}").unwrap_err();
        assert!(err.to_string().starts_with("invalid guidance payload"));
    }
}
