//! TTS (text-to-speech): buffered and streaming conversion of text into audio.

mod client;
mod types;

pub use client::TtsService;
pub use types::{
    Alignment, AudioFormat, CharacterTiming, ConvertOptions, ConvertRequest,
    PronunciationDictionaryLocator, VoiceSettings, WithTimestampsResponse,
};
