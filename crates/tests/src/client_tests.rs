use api_client::storage::{TOKEN_KEY, USER_KEY};
use api_client::{ApiClient, MemoryStore, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::{ApiErrorKind, Court};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::common::{MockBackend, USER_EMAIL};

#[tokio::test]
async fn test_bearer_header_attached_when_token_stored() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    let token = backend.token_for(USER_EMAIL);
    store.set(TOKEN_KEY, &token);

    client.get_all_courts().await.unwrap();

    let seen = backend.last_request("/api/courts").unwrap();
    assert_eq!(seen.authorization, Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let backend = MockBackend::start().await;
    let (client, _store) = backend.client();

    client.get_all_courts().await.unwrap();

    let seen = backend.last_request("/api/courts").unwrap();
    assert_eq!(seen.authorization, None);
}

#[tokio::test]
async fn test_unauthorized_clears_credentials_and_runs_handler() {
    let backend = MockBackend::start().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(&backend.base_url, store.clone()).with_unauthorized_handler(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    store.set(TOKEN_KEY, "expired-token");
    store.set(USER_KEY, r#"{"id":"u-1","email":"ana@example.com"}"#);

    let err = client.get_my_reservations().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    assert_eq!(err.status, Some(401));
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_login_does_not_run_unauthorized_handler() {
    let backend = MockBackend::start().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let client = ApiClient::new(&backend.base_url, Arc::new(MemoryStore::new()))
        .with_unauthorized_handler(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

    let err = client.login(USER_EMAIL, "wrong").await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_not_found_carries_server_detail() {
    let backend = MockBackend::start().await;
    let (client, _store) = backend.client();

    let err = client.get_court_by_id("missing").await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Court not found");
    assert_eq!(err.detail_or("fallback"), "Court not found");
}

#[tokio::test]
async fn test_validation_list_becomes_field_errors() {
    let backend = MockBackend::start().await;
    let (client, _store) = backend.client();

    let err = client
        .get::<serde_json::Value>("/api/courts/c-1/available-slots")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::ValidationError);
    assert_eq!(err.message, "field required");
    assert_eq!(err.field_errors.get("date").map(String::as_str), Some("field required"));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let backend = MockBackend::start().await;
    let (client, _store) = backend.client();

    let err = client.get::<Vec<Court>>("/health").await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert_eq!(err.detail_or("Failed to load courts"), "Failed to load courts");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = ApiClient::new("http://127.0.0.1:1", Arc::new(MemoryStore::new()));

    let err = client.get_all_courts().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status, None);
}
