use crate::tts::Alignment;
use crate::utils::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One generated clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryItem {
    #[serde(deserialize_with = "null_as_default")]
    pub history_item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_unix: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub character_count_change_from: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub character_count_change_to: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Voice settings used for the generation, shape varies by model.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub settings: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_link_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignments: Option<Alignments>,
}

impl HistoryItem {
    /// Characters billed for this generation.
    pub fn characters_used(&self) -> i64 {
        self.character_count_change_to - self.character_count_change_from
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feedback {
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_up: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub emotions: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inaccurate_clone: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub glitches: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_quality: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub other: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_alignment: Option<Alignment>,
}

/// One page of history, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListHistoryResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<HistoryItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_history_item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_more: bool,
}

/// Paging and filtering for [`HistoryService::list`](super::HistoryService::list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Items per page (API default 100, max 1000).
    pub page_size: Option<u32>,
    /// Only items generated with this voice.
    pub voice_id: Option<String>,
}

impl ListOptions {
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub history_item_ids: Vec<String>,
}
