//! Entry point: configuration plus access to the resource services.

pub mod builder;

pub use builder::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::history::HistoryService;
use crate::models::ModelsService;
use crate::transport::Transport;
use crate::tts::TtsService;
use crate::user::UserService;
use crate::voices::VoicesService;
use std::sync::Arc;

/// ElevenLabs API client.
///
/// Cloning is cheap and every clone shares the same transport and connection pool, so
/// one instance can serve concurrent tasks.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client with default configuration and the given API key.
    pub fn new(api_key: impl Into<String>) -> crate::Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Wrap an existing transport, e.g. a test double.
    pub fn with_transport(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    pub fn voices(&self) -> VoicesService {
        VoicesService::new(self.transport())
    }

    pub fn models(&self) -> ModelsService {
        ModelsService::new(self.transport())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.transport())
    }

    pub fn tts(&self) -> TtsService {
        TtsService::new(self.transport())
    }

    pub fn history(&self) -> HistoryService {
        HistoryService::new(self.transport())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
