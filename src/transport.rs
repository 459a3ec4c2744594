//! Shared request/response transport.
//!
//! Every resource service goes through the two primitives of [`Transport`]: a buffered
//! call whose body is fully read before returning, and a streaming call whose body is
//! handed back open. [`TransportExt`] layers JSON decoding on top of the buffered call.

mod context;
mod http;
pub(crate) mod query;
mod stream;

pub use context::RequestContext;
pub use http::{HttpTransport, API_KEY_HEADER};
pub use query::{build_url, QueryParams};
pub use stream::AudioStream;
pub use tokio_util::sync::CancellationToken;

use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("request cancelled")]
    Cancelled,

    #[error("Transport error: {0}")]
    Other(String),
}

/// One outgoing call: method, root-relative path (query included) and an optional
/// pre-encoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Bytes>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body. Serialization happens here so a bad body never reaches the wire.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let encoded = serde_json::to_vec(body).map_err(Error::Encoding)?;
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }
}

/// The capability every resource service depends on.
///
/// Implementations must be safe to share across tasks; the reqwest-backed
/// [`HttpTransport`] is, and tests substitute in-memory fakes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the call and return the whole 2xx body. Non-2xx responses become
    /// [`Error::Api`]; the body is always drained before returning.
    async fn execute(&self, ctx: &RequestContext, request: ApiRequest) -> Result<Bytes>;

    /// Perform the call and return the 2xx body as a live stream owned by the caller.
    async fn execute_stream(&self, ctx: &RequestContext, request: ApiRequest)
        -> Result<AudioStream>;
}

/// Typed helpers over the buffered primitive.
#[async_trait]
pub trait TransportExt: Transport {
    /// Buffered call decoded as JSON into `T`.
    async fn invoke<T>(&self, ctx: &RequestContext, request: ApiRequest) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let body = self.execute(ctx, request).await?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Buffered call whose body is read and discarded without decoding.
    async fn invoke_unit(&self, ctx: &RequestContext, request: ApiRequest) -> Result<()> {
        self.execute(ctx, request).await.map(|_| ())
    }
}

impl<T: Transport + ?Sized> TransportExt for T {}
