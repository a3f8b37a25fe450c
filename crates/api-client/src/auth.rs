use reqwest::multipart::Form;
use shared_types::{ApiError, RegisterRequest, TokenResponse, User};

use crate::client::{ApiClient, ApiResult};
use crate::storage::{TOKEN_KEY, USER_KEY};

/// `/api/auth/*` endpoints and the locally persisted session.
impl ApiClient {
    /// `POST /api/auth/register`. Does not sign the user in.
    pub async fn register(&self, data: &RegisterRequest) -> ApiResult<User> {
        self.post("/api/auth/register", data).await
    }

    /// `POST /api/auth/login` as multipart `username`/`password`.
    ///
    /// A non-empty `access_token` in the response is persisted; nothing is
    /// written on failure.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        let form = Form::new()
            .text("username", email.to_string())
            .text("password", password.to_string());
        let token: TokenResponse = self.post_multipart("/api/auth/login", form).await?;
        if !token.access_token.is_empty() {
            self.store().set(TOKEN_KEY, &token.access_token);
        }
        Ok(token)
    }

    /// `GET /api/auth/me`, caching the profile JSON under `user`.
    pub async fn get_profile(&self) -> ApiResult<User> {
        let user: User = self.get("/api/auth/me").await?;
        let json = serde_json::to_string(&user).map_err(|e| ApiError::decode(e.to_string()))?;
        self.store().set(USER_KEY, &json);
        Ok(user)
    }

    /// Remove the stored token and profile. Safe to call repeatedly.
    pub fn logout(&self) {
        self.store().remove(TOKEN_KEY);
        self.store().remove(USER_KEY);
    }

    /// The cached profile, if one is stored and still parses.
    pub fn get_current_user(&self) -> Option<User> {
        let raw = self.store().get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable cached profile");
                None
            }
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.token()
    }

    /// True iff a non-empty token is stored. Says nothing about validity.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
