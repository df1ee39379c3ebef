//! Provider-level tests against mocked HTTP endpoints
//!
//! Run with: cargo test --test providers_test

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tolmach::translate::providers::{LibreProvider, MyMemoryProvider, TranslationProvider};

#[tokio::test]
async fn libre_tries_mirrors_in_order() {
    let broken = MockServer::start().await;
    let working = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&broken)
        .await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "translatedText": "cześć" }
        ])))
        .expect(1)
        .mount(&working)
        .await;

    let provider = LibreProvider::with_bases(vec![broken.uri(), working.uri()]);
    let out = provider.translate("привіт", "uk", "pl").await;

    assert_eq!(out.as_deref(), Some("cześć"));
}

#[tokio::test]
async fn libre_gives_up_when_every_mirror_fails() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    for server in [&first, &second] {
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(server)
            .await;
    }

    let provider = LibreProvider::with_bases(vec![first.uri(), second.uri()]);
    assert_eq!(provider.translate("привіт", "uk", "pl").await, None);
}

#[tokio::test]
async fn mymemory_rejects_responses_without_translation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseStatus": 403
        })))
        .mount(&server)
        .await;

    let provider = MyMemoryProvider::with_base_url(server.uri());
    assert_eq!(provider.translate("привіт", "uk", "pl").await, None);
}

#[tokio::test]
async fn mymemory_trims_and_rejects_empty_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": { "translatedText": "   " }
        })))
        .mount(&server)
        .await;

    let provider = MyMemoryProvider::with_base_url(server.uri());
    assert_eq!(provider.translate("привіт", "uk", "pl").await, None);
}
