use crate::utils::null_as_default;
use serde::{Deserialize, Serialize};

/// A text-to-speech model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    #[serde(deserialize_with = "null_as_default")]
    pub model_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub can_be_finetuned: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_do_text_to_speech: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_do_voice_conversion: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_style: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_speaker_boost: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub serves_pro_voices: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub token_cost_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub requires_alpha_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters_request_free: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters_request_paid: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "null_as_default")]
    pub language_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Named container for the model list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListModelsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<Model>,
}

impl ListModelsResponse {
    pub fn find(&self, model_id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.model_id == model_id)
    }

    /// Models usable for text-to-speech conversion.
    pub fn text_to_speech(&self) -> impl Iterator<Item = &Model> {
        self.models.iter().filter(|m| m.can_do_text_to_speech)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_decodes_with_languages() {
        let model: Model = serde_json::from_str(
            r#"{"model_id":"eleven_turbo_v2","name":"Turbo","can_do_text_to_speech":true,
                "token_cost_factor":0.5,"languages":[{"language_id":"en","name":"English"}]}"#,
        )
        .unwrap();
        assert_eq!(model.model_id, "eleven_turbo_v2");
        assert!(model.can_do_text_to_speech);
        assert!(!model.can_be_finetuned);
        assert_eq!(model.languages[0].language_id, "en");
    }

    #[test]
    fn list_helpers() {
        let list = ListModelsResponse {
            models: vec![
                Model {
                    model_id: "a".into(),
                    can_do_text_to_speech: true,
                    ..Default::default()
                },
                Model {
                    model_id: "b".into(),
                    ..Default::default()
                },
            ],
        };
        assert!(list.find("b").is_some());
        assert!(list.find("c").is_none());
        assert_eq!(list.text_to_speech().count(), 1);
    }
}
