//! # elevenlabs-rust
//!
//! Typed async client for the ElevenLabs text-to-speech and voice management API.
//!
//! ## Overview
//!
//! A single [`Client`] owns the endpoint configuration and a shared HTTP transport.
//! Per-resource services borrow that transport and expose one method per API call:
//!
//! | Service | Accessor | Covers |
//! |---------|----------|--------|
//! | [`voices::VoicesService`] | [`Client::voices`] | voice library, settings, sharing |
//! | [`models::ModelsService`] | [`Client::models`] | available synthesis models |
//! | [`user::UserService`] | [`Client::user`] | account and subscription |
//! | [`tts::TtsService`] | [`Client::tts`] | text-to-speech conversion |
//! | [`history::HistoryService`] | [`Client::history`] | generation history and downloads |
//!
//! Calls either decode a typed JSON response or hand back an [`AudioStream`] that owns
//! the live connection. Every failure is one [`Error`]; non-2xx responses are
//! normalized into an [`ApiError`] carrying status, message and detail.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_rust::tts::ConvertRequest;
//! use elevenlabs_rust::{Client, RequestContext};
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_rust::Result<()> {
//!     let client = Client::builder().api_key("your-api-key").build()?;
//!
//!     let request = ConvertRequest::new("Hello there!").model_id("eleven_multilingual_v2");
//!     let audio = client
//!         .tts()
//!         .convert(&RequestContext::background(), "21m00Tcm4TlvDq8ikWAM", &request, None)
//!         .await?;
//!     let bytes = audio.collect_bytes().await?;
//!     println!("received {} bytes", bytes.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod history;
pub mod models;
pub mod transport;
pub mod tts;
pub mod user;
pub mod voices;

mod utils;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use transport::{
    build_url, ApiRequest, AudioStream, CancellationToken, HttpTransport, QueryParams,
    RequestContext, Transport, TransportError, TransportExt, API_KEY_HEADER,
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream of fallible items.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, Error};
