use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::ApiError;
use std::sync::Arc;

use crate::config::app_config;
use crate::storage::{default_store, TokenStore, TOKEN_KEY, USER_KEY};

pub type ApiResult<T> = Result<T, ApiError>;

/// Called after a 401 on an authenticated request, once credentials are cleared.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// Client route the default unauthorized handler sends the browser to.
pub const LOGIN_PATH: &str = "/login";

/// The single configured HTTP entry point of the application.
///
/// Cloning is cheap: the connection pool, store and handler are shared.
/// Every request gets `Authorization: Bearer <token>` when a token is
/// stored. There is no retry, timeout or backoff policy.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    store: Arc<dyn TokenStore>,
    on_unauthorized: UnauthorizedHandler,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
            store,
            on_unauthorized: Arc::new(redirect_to_login),
        }
    }

    /// Client for the configured backend using the platform token store.
    pub fn from_config() -> Self {
        Self::new(&app_config().api.base_url, default_store())
    }

    pub fn with_unauthorized_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Arc::new(handler);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &dyn TokenStore {
        self.store.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, bool) {
        tracing::debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        match self.token() {
            Some(token) => (builder.bearer_auth(token), true),
            None => (builder, false),
        }
    }

    /// Send a request and turn any non-2xx status into an [`ApiError`].
    async fn execute(&self, builder: RequestBuilder, authenticated: bool) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized(authenticated);
        }
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    /// Clear stored credentials. The handler only runs when the rejected
    /// request carried a token; a failed login stays on the login page.
    fn handle_unauthorized(&self, authenticated: bool) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        if authenticated {
            tracing::warn!("session rejected by backend, credentials cleared");
            (self.on_unauthorized)();
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let (builder, auth) = self.request(Method::GET, path);
        Self::decode(self.execute(builder, auth).await?).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (builder, auth) = self.request(Method::GET, path);
        Self::decode(self.execute(builder.query(query), auth).await?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (builder, auth) = self.request(Method::POST, path);
        Self::decode(self.execute(builder.json(body), auth).await?).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let (builder, auth) = self.request(Method::POST, path);
        Self::decode(self.execute(builder.multipart(form), auth).await?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (builder, auth) = self.request(Method::PUT, path);
        Self::decode(self.execute(builder.json(body), auth).await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let (builder, auth) = self.request(Method::DELETE, path);
        Self::decode(self.execute(builder, auth).await?).await
    }

    /// DELETE where the backend answers `204 No Content`.
    pub async fn delete_no_content(&self, path: &str) -> ApiResult<()> {
        let (builder, auth) = self.request(Method::DELETE, path);
        self.execute(builder, auth).await.map(|_| ())
    }
}

/// Default unauthorized handler: full navigation to the login route.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(LOGIN_PATH).is_err() {
                tracing::error!("failed to navigate to {LOGIN_PATH}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("unauthorized, login required at {LOGIN_PATH}");
}
