//! Profile envelope parsing
//!
//! Chat-completions providers wrap the structured output in a
//! `choices[0].message.content` envelope whose shape is theirs, not ours.
//! The walk fails with `MalformedResponse` naming the exact level that
//! broke; decoding the extracted payload fails with `SchemaViolation`
//! carrying the serde detail (including the offending field).

use serde_json::Value;

use crate::application::ports::outbound::{CreatureProfile, GeneratorError};

/// Extract and decode the creature profile from a provider envelope.
pub fn parse_profile_envelope(envelope: &Value) -> Result<CreatureProfile, GeneratorError> {
    let choices = envelope
        .get("choices")
        .ok_or_else(|| GeneratorError::malformed("missing 'choices' key in response"))?;

    let choices = choices
        .as_array()
        .filter(|array| !array.is_empty())
        .ok_or_else(|| GeneratorError::malformed("'choices' is not an array or is empty"))?;

    let message = choices[0]
        .get("message")
        .filter(|value| value.is_object())
        .ok_or_else(|| GeneratorError::malformed("missing or invalid 'message' in choices[0]"))?;

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(|| GeneratorError::malformed("missing or invalid 'content' in message"))?;

    serde_json::from_str(content)
        .map_err(|err| GeneratorError::SchemaViolation { detail: err.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::value_objects::{ElementType, SecondaryType};

    fn payload() -> String {
        json!({
            "name": "Glimmering Griffon",
            "description": "A majestic griffon with shimmering golden feathers.",
            "image_generation_prompt": "A golden griffon soaring through clouds.",
            "photo_object": "a statue of a bird",
            "primary_type": "Flame",
            "secondary_type": "none",
            "height": 120, "weight": 48, "strength": 61, "toughness": 40,
            "agility": 72, "arcana": 15, "aura": 30, "charisma": 55,
            "intimidation": 44, "endurance": 50, "luck": 20,
        })
        .to_string()
    }

    fn envelope(content: &str) -> Value {
        json!({"choices": [{"message": {"content": content}}]})
    }

    fn malformed_detail(envelope: &Value) -> String {
        match parse_profile_envelope(envelope).unwrap_err() {
            GeneratorError::MalformedResponse { detail } => detail,
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn decodes_a_complete_profile() {
        let profile = parse_profile_envelope(&envelope(&payload())).unwrap();

        assert_eq!(profile.name, "Glimmering Griffon");
        assert_eq!(profile.primary_type, ElementType::Flame);
        assert_eq!(profile.secondary_type, SecondaryType::None);
        assert_eq!(profile.agility, 72);
        assert_eq!(profile.photo_object, "a statue of a bird");
    }

    #[test]
    fn each_missing_nesting_level_names_itself() {
        assert_eq!(
            malformed_detail(&json!({"content": "{}"})),
            "missing 'choices' key in response"
        );
        assert_eq!(
            malformed_detail(&json!({"choices": []})),
            "'choices' is not an array or is empty"
        );
        assert_eq!(
            malformed_detail(&json!({"choices": {"message": {}}})),
            "'choices' is not an array or is empty"
        );
        assert_eq!(
            malformed_detail(&json!({"choices": [{"text": "hi"}]})),
            "missing or invalid 'message' in choices[0]"
        );
        assert_eq!(
            malformed_detail(&json!({"choices": [{"message": "hi"}]})),
            "missing or invalid 'message' in choices[0]"
        );
        assert_eq!(
            malformed_detail(&json!({"choices": [{"message": {"role": "assistant"}}]})),
            "missing or invalid 'content' in message"
        );
        assert_eq!(
            malformed_detail(&json!({"choices": [{"message": {"content": 42}}]})),
            "missing or invalid 'content' in message"
        );
    }

    #[test]
    fn schema_violations_name_the_problem() {
        let err = parse_profile_envelope(&envelope("not json")).unwrap_err();
        assert!(matches!(err, GeneratorError::SchemaViolation { .. }));

        // Valid JSON, but a required field is missing.
        let err = parse_profile_envelope(&envelope(r#"{"name": "Griffon"}"#)).unwrap_err();
        match err {
            GeneratorError::SchemaViolation { detail } => {
                assert!(detail.contains("description"), "detail was: {detail}");
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }

        // A type outside the closed enumeration.
        let bad_type = payload().replace("\"Flame\"", "\"Lava\"");
        let err = parse_profile_envelope(&envelope(&bad_type)).unwrap_err();
        match err {
            GeneratorError::SchemaViolation { detail } => {
                assert!(detail.contains("Lava") || detail.contains("variant"), "detail: {detail}");
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }
}
