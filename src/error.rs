use crate::transport::TransportError;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Unified error type for the ElevenLabs client.
///
/// Every operation either succeeds or returns exactly one of these. Nothing is retried
/// and nothing is logged on the caller's behalf; inspect the variant to decide what to do.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body could not be serialized. Nothing was sent.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered 2xx but the body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of the failed call, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|e| e.status_code)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Cancelled))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(TransportError::Timeout) => true,
            Error::Transport(TransportError::Http(e)) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Normalized form of any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status_code: u16,
    /// The `message` field of the error body, or the status line ("404 Not Found").
    pub message: String,
    /// The `detail` field of the error body, or the raw body when it is not JSON.
    pub detail: Option<String>,
}

impl ApiError {
    /// Build the error from a status and the unread-until-now body bytes.
    ///
    /// Only a JSON object whose `detail` and `message` are strings (or null) counts as a
    /// structured body. Anything else, arrays and scalars included, is kept verbatim as
    /// the detail.
    pub fn from_parts(status: StatusCode, body: &[u8]) -> Self {
        let mut err = ApiError {
            status_code: status.as_u16(),
            message: status_line(status),
            detail: None,
        };

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Null) => {}
            Ok(Value::Object(fields)) => match (
                string_field(&fields, "detail"),
                string_field(&fields, "message"),
            ) {
                (Some(detail), Some(message)) => {
                    err.detail = detail.filter(|d| !d.is_empty()).map(str::to_owned);
                    if let Some(message) = message.filter(|m| !m.is_empty()) {
                        err.message = message.to_owned();
                    }
                }
                _ => err.detail = raw_detail(body),
            },
            _ => err.detail = raw_detail(body),
        }

        err
    }

    /// Drain the response body and normalize it. Consuming the response releases the
    /// underlying connection whether or not the body could be read.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        match response.bytes().await {
            Ok(body) => Self::from_parts(status, &body),
            Err(e) => {
                tracing::debug!(status = status.as_u16(), error = %e, "failed to read error body");
                Self::from_parts(status, &[])
            }
        }
    }
}

/// `Some(None)` when the field is absent or null, `None` when it is not a string.
fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<Option<&'a str>> {
    match fields.get(name) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.as_str())),
        Some(_) => None,
    }
}

fn raw_detail(body: &[u8]) -> Option<String> {
    let raw = String::from_utf8_lossy(body);
    (!raw.is_empty()).then(|| raw.into_owned())
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(
                f,
                "elevenlabs api error (status {}): {} - {}",
                self.status_code, self.message, detail
            ),
            None => write!(
                f,
                "elevenlabs api error (status {}): {}",
                self.status_code, self.message
            ),
        }
    }
}

impl std::error::Error for ApiError {}
