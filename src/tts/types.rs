//! TTS (Text-to-Speech) types.

use crate::utils::null_as_default;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-request voice overrides. Unset fields fall back to the voice's own settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationDictionaryLocator {
    pub pronunciation_dictionary_id: String,
    pub version_id: String,
}

/// JSON body of every conversion call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConvertRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pronunciation_dictionary_locators: Vec<PronunciationDictionaryLocator>,
}

impl ConvertRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }

    pub fn pronunciation_dictionary(
        mut self,
        dictionary_id: impl Into<String>,
        version_id: impl Into<String>,
    ) -> Self {
        self.pronunciation_dictionary_locators
            .push(PronunciationDictionaryLocator {
                pronunciation_dictionary_id: dictionary_id.into(),
                version_id: version_id.into(),
            });
        self
    }
}

/// Query-string options for conversion calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Latency optimization level, 0 (off) to 4 (max).
    pub optimize_streaming_latency: Option<u32>,
    /// Output format such as `mp3_44100_128` or `pcm_16000`.
    pub output_format: Option<String>,
}

impl ConvertOptions {
    pub fn optimize_streaming_latency(mut self, level: u32) -> Self {
        self.optimize_streaming_latency = Some(level);
        self
    }

    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    /// Container/codec implied by `output_format`; the API default is MP3.
    pub fn audio_format(&self) -> AudioFormat {
        self.output_format
            .as_deref()
            .map(AudioFormat::from_output_format)
            .unwrap_or(AudioFormat::Mp3)
    }
}

/// Codec family of an `output_format` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Opus,
    Pcm,
    Ulaw,
    Alaw,
    Wav,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/opus",
            Self::Pcm => "audio/pcm",
            Self::Ulaw => "audio/basic",
            Self::Alaw => "audio/x-alaw-basic",
            Self::Wav => "audio/wav",
        }
    }

    /// Parse the codec prefix of e.g. `mp3_44100_128`. Unknown codecs map to MP3.
    pub fn from_output_format(s: &str) -> Self {
        let codec = s.split('_').next().unwrap_or_default();
        match codec.to_lowercase().as_str() {
            "opus" => Self::Opus,
            "pcm" => Self::Pcm,
            "ulaw" => Self::Ulaw,
            "alaw" => Self::Alaw,
            "wav" => Self::Wav,
            _ => Self::Mp3,
        }
    }
}

/// Character-level timing of synthesized speech.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    #[serde(deserialize_with = "null_as_default")]
    pub characters: Vec<String>,
    #[serde(
        rename = "character_start_times_seconds",
        deserialize_with = "null_as_default"
    )]
    pub character_start_times: Vec<f64>,
    #[serde(
        rename = "character_end_times_seconds",
        deserialize_with = "null_as_default"
    )]
    pub character_end_times: Vec<f64>,
}

/// One character with its start and end offsets in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTiming<'a> {
    pub character: &'a str,
    pub start: f64,
    pub end: f64,
}

impl Alignment {
    /// Number of fully timed characters.
    pub fn len(&self) -> usize {
        self.characters
            .len()
            .min(self.character_start_times.len())
            .min(self.character_end_times.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterTiming<'_>> {
        self.characters
            .iter()
            .zip(&self.character_start_times)
            .zip(&self.character_end_times)
            .map(|((c, start), end)| CharacterTiming {
                character: c.as_str(),
                start: *start,
                end: *end,
            })
    }
}

/// Audio plus timing returned by `convert_with_timestamps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithTimestampsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub audio_base64: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_alignment: Option<Alignment>,
}

impl WithTimestampsResponse {
    /// Decode `audio_base64` into raw audio bytes.
    pub fn decode_audio(&self) -> Result<Vec<u8>> {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(self.audio_base64.as_bytes())
            .map_err(|e| Error::Decode(serde::de::Error::custom(format!("invalid audio_base64: {}", e))))
    }
}
