//! List Resources Example
//!
//! Walks the read-only endpoints (account, models, voices, history) and prints a short
//! summary of each. Failures are reported per step and do not stop the run.
//!
//! ```bash
//! export ELEVENLABS_API_KEY=...
//! cargo run --example list_resources
//! ```

use elevenlabs_rust::history::ListOptions;
use elevenlabs_rust::{Client, RequestContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elevenlabs_rust=info".into()),
        )
        .init();

    let client = Client::builder().build()?;
    let ctx = RequestContext::background();

    println!("Account:");
    match client.user().get_info(&ctx).await {
        Ok(user) => match user.subscription {
            Some(sub) => {
                println!("- tier: {}", sub.tier);
                println!("- characters: {} / {}", sub.character_count, sub.character_limit);
                println!("- voice limit: {}", sub.voice_limit);
            }
            None => println!("- no subscription info"),
        },
        Err(e) => println!("Error fetching account: {}", e),
    }

    println!("\nModels:");
    match client.models().list(&ctx).await {
        Ok(list) => {
            for model in list.text_to_speech() {
                println!("- {} ({})", model.name, model.model_id);
            }
        }
        Err(e) => println!("Error listing models: {}", e),
    }

    println!("\nVoices:");
    match client.voices().list(&ctx).await {
        Ok(list) => {
            for voice in &list.voices {
                println!("- {} [{}] {}", voice.name, voice.category, voice.voice_id);
            }
        }
        Err(e) => println!("Error listing voices: {}", e),
    }

    println!("\nRecent history:");
    let options = ListOptions::default().page_size(5);
    match client.history().list(&ctx, Some(&options)).await {
        Ok(page) => {
            for item in &page.history {
                let preview: String = item.text.chars().take(50).collect();
                println!("- \"{}\" ({}, {} chars)", preview, item.voice_name, item.characters_used());
            }
            if page.has_more {
                println!("- ... more after {}", page.last_history_item_id);
            }
        }
        Err(e) => println!("Error listing history: {}", e),
    }

    Ok(())
}
