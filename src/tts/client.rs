//! TTS (Text-to-Speech) service.

use super::types::{ConvertOptions, ConvertRequest, WithTimestampsResponse};
use crate::transport::query::params;
use crate::transport::{build_url, ApiRequest, AudioStream, RequestContext, Transport, TransportExt};
use crate::Result;
use std::sync::Arc;

/// Text-to-speech conversion for a given voice.
///
/// The audio-returning calls hand back an [`AudioStream`]; read it to the end or drop
/// it to release the connection.
#[derive(Clone)]
pub struct TtsService {
    transport: Arc<dyn Transport>,
}

impl TtsService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Convert text and return the audio once generation has started.
    pub async fn convert(
        &self,
        ctx: &RequestContext,
        voice_id: &str,
        request: &ConvertRequest,
        options: Option<&ConvertOptions>,
    ) -> Result<AudioStream> {
        let path = with_options(format!("/v1/text-to-speech/{}", voice_id), options);
        let request = ApiRequest::post(path).json(request)?;
        self.transport.execute_stream(ctx, request).await
    }

    /// Convert text and return base64 audio with character-level timing.
    pub async fn convert_with_timestamps(
        &self,
        ctx: &RequestContext,
        voice_id: &str,
        request: &ConvertRequest,
        options: Option<&ConvertOptions>,
    ) -> Result<WithTimestampsResponse> {
        let path = with_options(
            format!("/v1/text-to-speech/{}/with-timestamps", voice_id),
            options,
        );
        let request = ApiRequest::post(path).json(request)?;
        self.transport.invoke(ctx, request).await
    }

    /// Convert text via the streaming endpoint; audio chunks arrive as they are generated.
    pub async fn convert_stream(
        &self,
        ctx: &RequestContext,
        voice_id: &str,
        request: &ConvertRequest,
        options: Option<&ConvertOptions>,
    ) -> Result<AudioStream> {
        let path = with_options(format!("/v1/text-to-speech/{}/stream", voice_id), options);
        let request = ApiRequest::post(path).json(request)?;
        self.transport.execute_stream(ctx, request).await
    }

    /// Streaming conversion with timing. The body is a sequence of JSON objects shaped
    /// like [`WithTimestampsResponse`], one per generated chunk.
    pub async fn convert_stream_with_timestamps(
        &self,
        ctx: &RequestContext,
        voice_id: &str,
        request: &ConvertRequest,
        options: Option<&ConvertOptions>,
    ) -> Result<AudioStream> {
        let path = with_options(
            format!("/v1/text-to-speech/{}/stream/with-timestamps", voice_id),
            options,
        );
        let request = ApiRequest::post(path).json(request)?;
        self.transport.execute_stream(ctx, request).await
    }
}

fn with_options(path: String, options: Option<&ConvertOptions>) -> String {
    let Some(options) = options else {
        return path;
    };
    let query = params([
        (
            "optimize_streaming_latency",
            options.optimize_streaming_latency.map(|l| l.to_string()),
        ),
        ("output_format", options.output_format.clone()),
    ]);
    build_url(&path, &query)
}
