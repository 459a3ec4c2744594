//! Simple TTS Example
//!
//! Converts text to speech and writes the result to `output.mp3`.
//!
//! ```bash
//! export ELEVENLABS_API_KEY=...
//! export ELEVENLABS_VOICE_ID=...
//! cargo run --example simple_tts -- "Text to speak"
//! ```

use anyhow::Context;
use elevenlabs_rust::tts::{ConvertOptions, ConvertRequest, VoiceSettings};
use elevenlabs_rust::{Client, RequestContext};

const DEFAULT_TEXT: &str = "Hello! This is a simple test of the ElevenLabs Rust client library.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elevenlabs_rust=info".into()),
        )
        .init();

    let voice_id =
        std::env::var("ELEVENLABS_VOICE_ID").context("ELEVENLABS_VOICE_ID is not set")?;
    // API key comes from ELEVENLABS_API_KEY
    let client = Client::builder().build()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        args.join(" ")
    };
    println!("Converting: \"{}\"", text);

    let request = ConvertRequest::new(text)
        .model_id("eleven_flash_v2_5")
        .voice_settings(VoiceSettings {
            stability: Some(0.5),
            similarity_boost: Some(0.75),
            ..Default::default()
        });
    let options = ConvertOptions::default().output_format("mp3_44100_128");

    let audio = client
        .tts()
        .convert(&RequestContext::background(), &voice_id, &request, Some(&options))
        .await?;

    let mut file = tokio::fs::File::create("output.mp3")
        .await
        .context("creating output.mp3")?;
    let written = tokio::io::copy(&mut audio.into_reader(), &mut file).await?;

    println!("Saved {} bytes to output.mp3", written);
    Ok(())
}
