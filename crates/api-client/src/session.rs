use shared_types::{ApiError, LoginRequest, RegisterRequest, User};
use validator::Validate;

use crate::client::ApiClient;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Where the UI's view of the session currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    #[default]
    Loading,
    Anonymous,
    Authenticated(User),
}

impl SessionStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}

/// Result of a login or registration attempt. Errors never escape as `Err`;
/// the page renders the message.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Success(User),
    Failure(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthOutcome::Failure(message) => Some(message),
            AuthOutcome::Success(_) => None,
        }
    }
}

/// Initial session check: with a stored token, fetch the profile; any
/// failure clears the stored credentials.
pub async fn restore_session(client: &ApiClient) -> SessionStatus {
    if !client.is_authenticated() {
        return SessionStatus::Anonymous;
    }
    match client.get_profile().await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "session restored");
            SessionStatus::Authenticated(user)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load user profile");
            client.logout();
            SessionStatus::Anonymous
        }
    }
}

/// Log in and load the profile. Leaves no token behind on failure.
///
/// Blank or malformed credentials fail locally without a request.
pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> AuthOutcome {
    let form = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    if let Err(e) = validate_login(&form) {
        return AuthOutcome::Failure(first_field_message(&e).unwrap_or(e.message));
    }
    match authenticate(client, email, password).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "signed in");
            AuthOutcome::Success(user)
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign in failed");
            client.logout();
            AuthOutcome::Failure(e.detail_or(LOGIN_FAILED))
        }
    }
}

/// Create the account, then sign in with the same credentials.
///
/// The form is validated locally first; the first field message is used as
/// the failure text. Use [`validate_registration`] for per-field messages.
pub async fn sign_up(client: &ApiClient, data: &RegisterRequest) -> AuthOutcome {
    if let Err(e) = validate_registration(data) {
        return AuthOutcome::Failure(first_field_message(&e).unwrap_or(e.message));
    }
    let result = async {
        client.register(data).await?;
        authenticate(client, &data.email, &data.password).await
    }
    .await;

    match result {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "registered and signed in");
            AuthOutcome::Success(user)
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration failed");
            client.logout();
            AuthOutcome::Failure(e.detail_or(REGISTRATION_FAILED))
        }
    }
}

pub fn sign_out(client: &ApiClient) -> SessionStatus {
    client.logout();
    tracing::info!("signed out");
    SessionStatus::Anonymous
}

/// Local checks on the login form, keyed by field name.
pub fn validate_login(data: &LoginRequest) -> Result<(), ApiError> {
    data.validate().map_err(ApiError::from)
}

/// Local checks on the registration form, keyed by field name.
pub fn validate_registration(data: &RegisterRequest) -> Result<(), ApiError> {
    data.validate().map_err(ApiError::from)
}

fn first_field_message(error: &ApiError) -> Option<String> {
    ["email", "password", "first_name", "last_name"]
        .iter()
        .find_map(|field| error.field_errors.get(*field).cloned())
}

async fn authenticate(client: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    client.login(email, password).await?;
    client.get_profile().await
}
