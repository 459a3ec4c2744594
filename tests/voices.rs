mod common;

use common::MockServerFixture;
use elevenlabs_rust::voices::{SimilarVoicesRequest, UpdateVoiceRequest, VoiceSettings};
use elevenlabs_rust::RequestContext;
use mockito::Matcher;

const VOICE_JSON: &str = r#"{
    "voice_id": "21m00Tcm4TlvDq8ikWAM",
    "name": "Rachel",
    "category": "premade",
    "labels": {"accent": "american"},
    "samples": null,
    "settings": {"stability": 0.5, "similarity_boost": 0.75},
    "is_owner": false
}"#;

#[tokio::test]
async fn test_list_voices() {
    let mut fixture = MockServerFixture::new().await;
    let body = format!(r#"{{"voices":[{}]}}"#, VOICE_JSON);
    let mock = fixture.mock_json("GET", "/v1/voices", 200, &body).await;

    let list = fixture
        .client
        .voices()
        .list(&RequestContext::background())
        .await
        .unwrap();

    assert_eq!(list.voices.len(), 1);
    let voice = &list.voices[0];
    assert_eq!(voice.voice_id, "21m00Tcm4TlvDq8ikWAM");
    assert_eq!(voice.labels.get("accent").map(String::as_str), Some("american"));
    assert!(voice.samples.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_voice() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/v1/voices/21m00Tcm4TlvDq8ikWAM", 200, VOICE_JSON)
        .await;

    let voice = fixture
        .client
        .voices()
        .get(&RequestContext::background(), "21m00Tcm4TlvDq8ikWAM")
        .await
        .unwrap();
    assert_eq!(voice.name, "Rachel");
    assert_eq!(voice.settings.map(|s| s.similarity_boost), Some(0.75));
}

#[tokio::test]
async fn test_settings_endpoints() {
    let mut fixture = MockServerFixture::new().await;
    let _default = fixture
        .mock_json(
            "GET",
            "/v1/voices/settings/default",
            200,
            r#"{"stability":0.5,"similarity_boost":0.75,"style":0.0,"use_speaker_boost":true}"#,
        )
        .await;
    let _voice = fixture
        .mock_json(
            "GET",
            "/v1/voices/abc/settings",
            200,
            r#"{"stability":0.3,"similarity_boost":0.9}"#,
        )
        .await;

    let ctx = RequestContext::background();
    let defaults = fixture.client.voices().default_settings(&ctx).await.unwrap();
    assert_eq!(defaults.use_speaker_boost, Some(true));

    let settings = fixture.client.voices().get_settings(&ctx, "abc").await.unwrap();
    assert_eq!(settings.stability, 0.3);
    assert_eq!(settings.style, None);
}

#[tokio::test]
async fn test_update_settings_with_empty_response() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/voices/test-voice/settings/edit")
        .match_header("xi-api-key", common::TEST_API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "stability": 0.7,
            "similarity_boost": 0.85
        })))
        .with_status(200)
        .create_async()
        .await;

    fixture
        .client
        .voices()
        .update_settings(
            &RequestContext::background(),
            "test-voice",
            &VoiceSettings::new(0.7, 0.85),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_voice_ignores_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("DELETE", "/v1/voices/abc")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    fixture
        .client
        .voices()
        .delete(&RequestContext::background(), "abc")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_voice_sends_only_set_fields() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/voices/abc/edit")
        .match_body(Matcher::Json(serde_json::json!({"name": "Narrator"})))
        .with_status(200)
        .create_async()
        .await;

    let update = UpdateVoiceRequest {
        name: Some("Narrator".to_string()),
        ..Default::default()
    };
    fixture
        .client
        .voices()
        .update(&RequestContext::background(), "abc", &update)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_shared_and_similar_voices() {
    let mut fixture = MockServerFixture::new().await;
    let body = format!(r#"{{"voices":[{}]}}"#, VOICE_JSON);
    let _shared = fixture.mock_json("GET", "/v1/shared-voices", 200, &body).await;
    let similar = fixture
        .server
        .mock("POST", "/v1/similar-voices")
        .match_body(Matcher::Json(serde_json::json!({"audio_file": "AQID"})))
        .with_status(200)
        .with_body(r#"{"voices":[]}"#)
        .create_async()
        .await;

    let ctx = RequestContext::background();
    let shared = fixture.client.voices().shared_voices(&ctx).await.unwrap();
    assert_eq!(shared.voices[0].category, "premade");

    let request = SimilarVoicesRequest {
        audio_file: vec![1, 2, 3],
    };
    let found = fixture
        .client
        .voices()
        .similar_voices(&ctx, &request)
        .await
        .unwrap();
    assert!(found.voices.is_empty());
    similar.assert_async().await;
}

#[tokio::test]
async fn test_unknown_voice_is_api_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error("GET", "/v1/voices/nope", 404, r#"{"detail":"voice_not_found"}"#)
        .await;

    let err = fixture
        .client
        .voices()
        .get(&RequestContext::background(), "nope")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.api_error().unwrap().message, "404 Not Found");
}
