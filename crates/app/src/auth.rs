use api_client::session::{self, AuthOutcome, SessionStatus};
use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::RegisterRequest;

/// Global authentication state, seeded by the startup session check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<SessionStatus>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionStatus::Loading),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.read().is_admin()
    }

    /// Sign in and publish the profile on success.
    pub async fn login(mut self, api: &ApiClient, email: &str, password: &str) -> AuthOutcome {
        let outcome = session::sign_in(api, email, password).await;
        if let AuthOutcome::Success(user) = &outcome {
            self.session.set(SessionStatus::Authenticated(user.clone()));
        }
        outcome
    }

    /// Register, sign in and publish the profile on success.
    pub async fn register(mut self, api: &ApiClient, data: &RegisterRequest) -> AuthOutcome {
        let outcome = session::sign_up(api, data).await;
        if let AuthOutcome::Success(user) = &outcome {
            self.session.set(SessionStatus::Authenticated(user.clone()));
        }
        outcome
    }

    pub fn logout(&mut self, api: &ApiClient) {
        self.session.set(session::sign_out(api));
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
