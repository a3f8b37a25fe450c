use api_client::storage::{TOKEN_KEY, USER_KEY};
use api_client::TokenStore;
use pretty_assertions::assert_eq;
use shared_types::{ApiErrorKind, RegisterRequest, UserRole};

use crate::common::{MockBackend, ADMIN_EMAIL, PASSWORD, USER_EMAIL};

fn registration(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        first_name: "Bea".to_string(),
        last_name: "Ruiz".to_string(),
        phone: Some("555-0100".to_string()),
    }
}

#[tokio::test]
async fn test_login_sends_multipart_and_stores_token() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();

    let token = client.login(USER_EMAIL, PASSWORD).await.unwrap();

    assert_eq!(token.token_type, "bearer");
    assert_eq!(store.get(TOKEN_KEY), Some(token.access_token));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_login_failure_stores_nothing() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();

    let err = client.login(USER_EMAIL, "nope").await.unwrap_err();

    assert_eq!(err.message, "Incorrect email or password");
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_get_profile_caches_user() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    client.login(ADMIN_EMAIL, PASSWORD).await.unwrap();

    let user = client.get_profile().await.unwrap();

    assert_eq!(user.email, ADMIN_EMAIL);
    assert_eq!(user.role, UserRole::Admin);
    assert!(store.get(USER_KEY).is_some());
    assert_eq!(client.get_current_user(), Some(user));
}

#[tokio::test]
async fn test_register_returns_user_without_signing_in() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();

    let user = client.register(&registration("bea@example.com")).await.unwrap();

    assert_eq!(user.email, "bea@example.com");
    assert_eq!(user.first_name, "Bea");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn test_register_duplicate_email_surfaces_detail() {
    let backend = MockBackend::start().await;
    let (client, _store) = backend.client();

    let err = client.register(&registration(USER_EMAIL)).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::BadRequest);
    assert_eq!(err.message, "Email already registered");
}

#[tokio::test]
async fn test_logout_removes_token_and_user_idempotently() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    client.login(USER_EMAIL, PASSWORD).await.unwrap();
    client.get_profile().await.unwrap();

    client.logout();
    client.logout();

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(client.get_current_user(), None);
}
