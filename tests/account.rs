//! Models and user endpoints.

mod common;

use common::MockServerFixture;
use elevenlabs_rust::RequestContext;

#[tokio::test]
async fn test_models_bare_array_is_wrapped() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/v1/models",
            200,
            r#"[{"model_id":"eleven_multilingual_v2","name":"Multilingual v2","can_do_text_to_speech":true}]"#,
        )
        .await;

    let list = fixture
        .client
        .models()
        .list(&RequestContext::background())
        .await
        .unwrap();

    assert_eq!(list.models.len(), 1);
    assert_eq!(list.models[0].model_id, "eleven_multilingual_v2");
    assert!(list.models[0].can_do_text_to_speech);
    assert!(list.find("eleven_multilingual_v2").is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_models_wrapped_object_is_decode_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/v1/models", 200, r#"{"models":[]}"#)
        .await;

    let err = fixture
        .client
        .models()
        .list(&RequestContext::background())
        .await
        .unwrap_err();
    assert!(matches!(err, elevenlabs_rust::Error::Decode(_)));
}

#[tokio::test]
async fn test_subscription() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/v1/user/subscription",
            200,
            r#"{"tier":"creator","character_count":1200,"character_limit":100000,
                "status":"active","next_invoice":{"amount_due_cents":2200,"next_payment_attempt_unix":1700000000}}"#,
        )
        .await;

    let sub = fixture
        .client
        .user()
        .get_subscription(&RequestContext::background())
        .await
        .unwrap();
    assert_eq!(sub.tier, "creator");
    assert_eq!(sub.remaining_characters(), 98_800);
    assert_eq!(sub.next_invoice.map(|i| i.amount_due_cents), Some(2200));
}

#[tokio::test]
async fn test_user_info() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/v1/user",
            200,
            r#"{"subscription":{"tier":"free"},"is_new_user":true,"xi_api_key":"k",
                "first_name":null,"partnerstack_partner_default_link":"https://x.example"}"#,
        )
        .await;

    let user = fixture
        .client
        .user()
        .get_info(&RequestContext::background())
        .await
        .unwrap();
    assert!(user.is_new_user);
    assert_eq!(user.first_name, None);
    assert_eq!(user.subscription.map(|s| s.tier).as_deref(), Some("free"));
    assert_eq!(
        user.partner_stack_partner_default_link.as_deref(),
        Some("https://x.example")
    );
}
