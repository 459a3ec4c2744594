//! Services work against any `Transport`, not just the HTTP one.

use async_trait::async_trait;
use bytes::Bytes;
use elevenlabs_rust::{
    ApiError, ApiRequest, AudioStream, Client, Error, RequestContext, Result, Transport,
};
use std::sync::{Arc, Mutex};

/// Records every request and answers from a fixed table.
#[derive(Default)]
struct RecordingTransport {
    seen: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    fn seen(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, _ctx: &RequestContext, request: ApiRequest) -> Result<Bytes> {
        self.seen.lock().unwrap().push(request.clone());
        match request.path.as_str() {
            "/v1/models" => Ok(Bytes::from_static(br#"[{"model_id":"eleven_turbo_v2"}]"#)),
            "/v1/user/subscription" => Ok(Bytes::from_static(br#"{"tier":"pro"}"#)),
            _ => Err(ApiError::from_parts(
                reqwest::StatusCode::NOT_FOUND,
                br#"{"detail":"no fixture"}"#,
            )
            .into()),
        }
    }

    async fn execute_stream(
        &self,
        _ctx: &RequestContext,
        request: ApiRequest,
    ) -> Result<AudioStream> {
        self.seen.lock().unwrap().push(request);
        Ok(AudioStream::from_chunks(
            vec![Bytes::from_static(b"fake "), Bytes::from_static(b"audio")],
            Some("audio/mpeg".to_string()),
        ))
    }
}

fn client() -> (Arc<RecordingTransport>, Client) {
    let transport = Arc::new(RecordingTransport::default());
    let client = Client::with_transport(transport.clone(), "memory://");
    (transport, client)
}

#[tokio::test]
async fn test_buffered_calls_go_through_transport() {
    let (transport, client) = client();
    let ctx = RequestContext::background();

    let models = client.models().list(&ctx).await.unwrap();
    assert_eq!(models.models[0].model_id, "eleven_turbo_v2");

    let sub = client.user().get_subscription(&ctx).await.unwrap();
    assert_eq!(sub.tier, "pro");

    let paths: Vec<_> = transport.seen().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/v1/models", "/v1/user/subscription"]);
}

#[tokio::test]
async fn test_streaming_calls_go_through_transport() {
    let (transport, client) = client();
    let audio = client
        .history()
        .download(&RequestContext::background(), &["a"])
        .await
        .unwrap();
    assert_eq!(&audio.collect_bytes().await.unwrap()[..], b"fake audio");

    let seen = transport.seen();
    assert_eq!(seen[0].method, reqwest::Method::POST);
    assert_eq!(
        seen[0].body.as_deref(),
        Some(&br#"{"history_item_ids":["a"]}"#[..])
    );
}

#[tokio::test]
async fn test_transport_errors_surface_unchanged() {
    let (_, client) = client();
    let err = client
        .voices()
        .get(&RequestContext::background(), "missing")
        .await
        .unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.status_code, 404);
            assert_eq!(api.detail.as_deref(), Some("no fixture"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
