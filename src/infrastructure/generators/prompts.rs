//! Generation instructions and the strict profile schema
//!
//! The vision provider is steered twice: a short top-level instruction in
//! the message, and per-field guidance carried as `description` strings
//! inside the JSON schema the provider must satisfy.

use serde_json::{json, Value};

use crate::domain::value_objects::ElementType;

/// Top-level instruction sent with the photo.
pub const PROFILE_INSTRUCTION: &str = "Imagine a brand-new collectible creature based on the \
subject of this photo. Invent a cohesive name, an encyclopedia-style description, and a \
text-to-image prompt that an image model can render as the creature's artwork. Give the \
creature imaginative traits that highlight or playfully exaggerate the subject's appearance. \
The artwork should have a vibrant, friendly cartoon style.";

const NAME_GUIDANCE: &str = "A short, catchy creature name. Prefer portmanteaus and fusion \
words built from the creature's abilities, appearance, or element (a plant reptile might be \
'Floragon'), sounds that evoke its character, or playful alliteration. Keep it easy to say \
and remember.";

const DESCRIPTION_GUIDANCE: &str = "A creature-encyclopedia entry of two to four sentences. \
Blend the familiar and the fantastical: ground the creature in one observable behavior or \
habitat detail, then hint at its powers or growth. Written as credible in-world lore.";

const IMAGE_PROMPT_GUIDANCE: &str = "A text-to-image prompt describing the creature for a \
compact, expressive cartoon illustration. Name its defining features, stylized proportions, \
one or two whimsical twists, a vibrant palette matching its element, and an expressive pose. \
Keep shading simple.";

const PHOTO_OBJECT_GUIDANCE: &str = "The object in this photo, in a few plain words.";

const PRIMARY_TYPE_GUIDANCE: &str = "The elemental type that best captures the creature's \
style and natural affinities.";

const SECONDARY_TYPE_GUIDANCE: &str = "A secondary elemental type, only when it adds real \
character; otherwise 'none'. A single type is better when it strongly fits the creature's \
lore.";

fn stat_guidance(stat: &str, role: &str) -> String {
    format!(
        "Calculate the creature's {stat} from its appearance, description, and lore. \
         {role} Use a whole number."
    )
}

/// The strict JSON schema the provider's structured output must satisfy.
pub fn profile_schema() -> Value {
    let elements: Vec<&str> = ElementType::ALL.iter().map(|e| e.as_str()).collect();
    let mut secondary: Vec<&str> = vec!["none"];
    secondary.extend(&elements);

    let stats = [
        ("height", "Height is the number of centimeters."),
        ("weight", "Weight is the number of kilograms."),
        ("strength", "Strength governs physical attack power."),
        ("toughness", "Toughness represents physical defense."),
        ("agility", "Agility determines speed and evasion."),
        ("arcana", "Arcana governs special attack power."),
        ("aura", "Aura represents special defense."),
        ("charisma", "Charisma determines charm and persuasiveness."),
        ("intimidation", "Intimidation represents fearsome or imposing traits."),
        ("endurance", "Endurance governs health and stamina."),
        ("luck", "Luck adds an unpredictable element."),
    ];

    let mut properties = serde_json::Map::new();
    properties.insert("name".into(), json!({"type": "string", "description": NAME_GUIDANCE}));
    properties.insert(
        "description".into(),
        json!({"type": "string", "description": DESCRIPTION_GUIDANCE}),
    );
    properties.insert(
        "image_generation_prompt".into(),
        json!({"type": "string", "description": IMAGE_PROMPT_GUIDANCE}),
    );
    properties.insert(
        "photo_object".into(),
        json!({"type": "string", "description": PHOTO_OBJECT_GUIDANCE}),
    );
    properties.insert(
        "primary_type".into(),
        json!({"type": "string", "description": PRIMARY_TYPE_GUIDANCE, "enum": elements}),
    );
    properties.insert(
        "secondary_type".into(),
        json!({"type": "string", "description": SECONDARY_TYPE_GUIDANCE, "enum": secondary}),
    );
    for (stat, role) in stats {
        properties.insert(
            stat.into(),
            json!({"type": "integer", "description": stat_guidance(stat, role)}),
        );
    }

    let required: Vec<&str> = vec![
        "name",
        "description",
        "image_generation_prompt",
        "photo_object",
        "primary_type",
        "secondary_type",
        "height",
        "weight",
        "strength",
        "toughness",
        "agility",
        "arcana",
        "aura",
        "charisma",
        "intimidation",
        "endurance",
        "luck",
    ];

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_every_property() {
        let schema = profile_schema();
        let properties = schema["properties"].as_object().unwrap();
        let required: Vec<&str> =
            schema["required"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();

        assert_eq!(properties.len(), required.len());
        for field in required {
            assert!(properties.contains_key(field), "missing property for {field}");
        }
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn type_enums_are_closed_and_include_the_sentinel() {
        let schema = profile_schema();
        let primary = schema["properties"]["primary_type"]["enum"].as_array().unwrap();
        let secondary = schema["properties"]["secondary_type"]["enum"].as_array().unwrap();

        assert_eq!(primary.len(), ElementType::ALL.len());
        assert_eq!(secondary.len(), ElementType::ALL.len() + 1);
        assert_eq!(secondary[0], "none");
        assert!(primary.iter().all(|v| secondary.contains(v)));
    }
}
