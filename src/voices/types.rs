//! Voice library types.

use serde::{Deserialize, Serialize};
use crate::utils::null_as_default;
use std::collections::HashMap;

/// Synthesis parameters attached to a voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub stability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub similarity_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl VoiceSettings {
    pub fn new(stability: f64, similarity_boost: f64) -> Self {
        Self {
            stability,
            similarity_boost,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
    #[serde(deserialize_with = "null_as_default")]
    pub voice_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub samples: Vec<Sample>,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_tuning: Option<FineTuning>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub labels: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub available_for_tiers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<VoiceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing: Option<SharingSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub high_quality_base_model_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_verification: Option<VoiceVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_on_resource: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_owner: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_legacy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_mixed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_unix: Option<i64>,
}

/// Audio sample uploaded for a cloned voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    #[serde(deserialize_with = "null_as_default")]
    pub sample_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuning {
    #[serde(deserialize_with = "null_as_default")]
    pub is_allowed_to_fine_tune: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finetuning_state: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub verification_failures: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_attempts_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub manual_verification_requested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Per-model progress, shape varies upstream.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub progress: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub message: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub verification_attempts: Vec<VerificationAttempt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub slice_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_verification: Option<ManualVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_verification_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_max_verification_attempts_reset_unix_ms: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationAttempt {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_unix: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub accepted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub similarity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub levenshtein_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording: Option<Recording>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recording {
    #[serde(deserialize_with = "null_as_default")]
    pub recording_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_date_unix: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualVerification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_time_unix: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<VerificationFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationFile {
    #[serde(deserialize_with = "null_as_default")]
    pub file_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_date_unix: i64,
}

/// Voice library sharing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharingSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_item_sample_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_unix: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub whitelisted_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_voice_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub financial_rewards_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub free_users_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub live_moderation_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_at_unix: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_mixing_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reader_app_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_reason: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub liked_by_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cloned_by_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub labels: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_message: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled_in_library: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation_check: Option<ModerationCheck>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub reader_restricted_on: Vec<ResourceRestriction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationCheck {
    #[serde(deserialize_with = "null_as_default")]
    pub date_checked_unix: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_check: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description_check: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub sample_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub sample_checks: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub captcha_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub captcha_checks: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRestriction {
    #[serde(deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceVerification {
    #[serde(deserialize_with = "null_as_default")]
    pub requires_verification: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub verification_failures: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_attempts_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub verification_attempts: Vec<VerificationAttempt>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListVoicesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub voices: Vec<Voice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedVoicesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub voices: Vec<Voice>,
}

/// Metadata changes for an existing voice. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// Reference audio to match against the voice library.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimilarVoicesRequest {
    /// Sent as a base64 string.
    #[serde(serialize_with = "base64_bytes")]
    pub audio_file: Vec<u8>,
}

fn base64_bytes<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: serde::Serializer,
{
    use base64::Engine as _;
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes.as_ref()))
}
