use super::{ApiRequest, AudioStream, RequestContext, Transport, TransportError};
use crate::error::ApiError;
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::header::CONTENT_TYPE;

/// Header carrying the raw API key on every request.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// reqwest-backed [`Transport`].
///
/// Holds only immutable configuration; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send the request and return the response whatever its status.
    async fn send(&self, ctx: &RequestContext, request: ApiRequest) -> Result<reqwest::Response> {
        // Plain concatenation: callers pass root-relative paths.
        let url = format!("{}{}", self.base_url, request.path);

        let mut req = self
            .client
            .request(request.method.clone(), &url)
            .header(API_KEY_HEADER, &self.api_key);

        if let Some(body) = request.body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        tracing::debug!(method = %request.method, path = %request.path, "sending request");

        let response = ctx
            .run(async { req.send().await.map_err(|e| Error::from(TransportError::Http(e))) })
            .await?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = response.status().as_u16(),
            "received response"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Normalize a non-2xx response. Reading its body obeys the call's deadline and
/// cancellation like any other body read.
async fn api_error(ctx: &RequestContext, response: reqwest::Response) -> Error {
    match ctx
        .run(async { Ok::<_, Error>(ApiError::from_response(response).await) })
        .await
    {
        Ok(api) => api.into(),
        Err(e) => e,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, ctx: &RequestContext, request: ApiRequest) -> Result<Bytes> {
        let response = self.send(ctx, request).await?;

        if !response.status().is_success() {
            return Err(api_error(ctx, response).await);
        }

        // Read the body to the end so the connection goes back to the pool.
        ctx.run(async {
            response
                .bytes()
                .await
                .map_err(|e| Error::from(TransportError::Http(e)))
        })
        .await
    }

    async fn execute_stream(
        &self,
        ctx: &RequestContext,
        request: ApiRequest,
    ) -> Result<AudioStream> {
        let response = self.send(ctx, request).await?;

        if !response.status().is_success() {
            // No stream goes back to the caller, so the body is consumed here.
            return Err(api_error(ctx, response).await);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response
            .bytes_stream()
            .map_err(|e| Error::from(TransportError::Http(e)));

        Ok(AudioStream::new(
            Box::pin(body),
            content_type,
            ctx.cancellation_token().cloned(),
        ))
    }
}
