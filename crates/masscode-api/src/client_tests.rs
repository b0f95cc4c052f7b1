//! Unit tests for the JservClient.

use super::*;
use crate::error::Error;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_client_default_base_url() {
    let client = JservClient::new().unwrap();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_client_with_custom_base_url_strips_trailing_slash() {
    let client = JservClient::with_base_url("http://127.0.0.1:9999/").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9999");
}

#[test]
fn test_builder_with_timeout() {
    let client = JservClient::builder()
        .base_url("http://example.test")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    assert_eq!(client.base_url(), "http://example.test");
}

#[tokio::test]
async fn test_get_tags_passes_params_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .and(query_param("name", "rust"))
        .and(query_param("_sort", "name"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": "t1", "name": "rust"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JservClient::with_base_url(mock_server.uri()).unwrap();
    let params = QueryParams::new().with("name", "rust").with("_sort", "name");
    let tags = client.get_tags(&params).await.unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "rust");
}

#[tokio::test]
async fn test_patch_snippet_sends_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/snippets/s1"))
        .and(body_json(serde_json::json!({"name": "renamed"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "s1", "name": "renamed"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JservClient::with_base_url(mock_server.uri()).unwrap();
    let snippet = client
        .patch_snippet("s1", &serde_json::json!({"name": "renamed"}))
        .await
        .unwrap();

    assert_eq!(snippet.name.as_deref(), Some("renamed"));
}

#[tokio::test]
async fn test_not_found_maps_resource_and_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/folders/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = JservClient::with_base_url(mock_server.uri()).unwrap();
    let err = client
        .patch_folder("missing", &serde_json::json!({"name": "x"}))
        .await
        .unwrap_err();

    match err {
        Error::Api(ApiError::NotFound { resource, id }) => {
            assert_eq!(resource, "folders");
            assert_eq!(id, "missing");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_body_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snippets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = JservClient::with_base_url(mock_server.uri()).unwrap();
    let err = client.get_snippets(&QueryParams::new()).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP error 500: boom");
}

#[tokio::test]
async fn test_bad_request_maps_to_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let client = JservClient::with_base_url(mock_server.uri()).unwrap();
    let err = client.get_tags(&QueryParams::new()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Api(ApiError::Validation { ref message }) if message == "Bad request"
    ));
}
