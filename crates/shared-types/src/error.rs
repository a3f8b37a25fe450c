use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of failures seen by the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ValidationError,
    ServerError,
    /// The request never produced an HTTP response.
    Network,
    /// The response body did not match the expected shape.
    Decode,
}

impl ApiErrorKind {
    /// Map an HTTP status code to an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            422 => ApiErrorKind::ValidationError,
            _ => ApiErrorKind::ServerError,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::BadRequest => write!(f, "BadRequest"),
            ApiErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ApiErrorKind::Forbidden => write!(f, "Forbidden"),
            ApiErrorKind::NotFound => write!(f, "NotFound"),
            ApiErrorKind::Conflict => write!(f, "Conflict"),
            ApiErrorKind::ValidationError => write!(f, "ValidationError"),
            ApiErrorKind::ServerError => write!(f, "ServerError"),
            ApiErrorKind::Network => write!(f, "Network"),
            ApiErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Error returned by every service call.
///
/// `message` holds the backend's `detail` string when one was sent. Pages
/// show it verbatim and fall back to their own wording otherwise, see
/// [`ApiError::detail_or`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// FastAPI error envelope: `{"detail": "..."}` or `{"detail": [{loc, msg}]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: DetailBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailBody {
    Message(String),
    Fields(Vec<FieldDetail>),
}

#[derive(Debug, Deserialize)]
struct FieldDetail {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(ApiErrorKind::ValidationError, message)
        }
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// A string `detail` becomes the message. A validation list is folded
    /// into `field_errors` keyed by the last path segment of `loc`, with the
    /// first entry's `msg` as the message. Any other body leaves the message
    /// empty so callers fall back to their own wording.
    pub fn from_response(status: u16, body: &str) -> Self {
        let mut err = Self::new(ApiErrorKind::from_status(status), String::new());
        err.status = Some(status);

        match serde_json::from_str::<ErrorBody>(body).map(|b| b.detail) {
            Ok(DetailBody::Message(detail)) => err.message = detail,
            Ok(DetailBody::Fields(fields)) => {
                if let Some(first) = fields.first() {
                    err.message = first.msg.clone();
                }
                for field in fields {
                    let name = field
                        .loc
                        .last()
                        .and_then(|v| v.as_str())
                        .unwrap_or("body")
                        .to_string();
                    err.field_errors.entry(name).or_insert(field.msg);
                }
            }
            Err(_) => {}
        }
        err
    }

    /// Whether the backend supplied a human-readable message.
    pub fn has_detail(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// The server-provided message, or `fallback` when none was sent.
    ///
    /// Transport and decode failures always use the fallback since their
    /// message is diagnostic text, not something to show a user.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self.kind {
            ApiErrorKind::Network | ApiErrorKind::Decode => fallback.to_string(),
            _ if self.has_detail() => self.message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        ApiError::validation("Please correct the highlighted fields", field_errors)
    }
}
