//! HTTP access to the courts reservation backend.
//!
//! One [`ApiClient`] per application. Service calls live in `impl ApiClient`
//! blocks grouped by resource; [`session`] layers the login/registration
//! flows on top.

pub mod auth;
pub mod client;
pub mod config;
pub mod courts;
pub mod reservations;
pub mod session;
pub mod storage;

pub use client::{ApiClient, ApiResult, UnauthorizedHandler, LOGIN_PATH};
pub use config::{app_config, feature_flags};
pub use session::{AuthOutcome, SessionStatus};
pub use storage::{default_store, MemoryStore, TokenStore};
