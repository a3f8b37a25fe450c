use serde::{Deserialize, Serialize};

/// Feature flags controlling optional parts of the client.
///
/// Every field defaults to `false` so that a missing or incomplete
/// config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the admin console (court management, all reservations) to
    /// users with the ADMIN role.
    #[serde(default)]
    pub admin_console: bool,
}

/// Where the REST backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Reservation flow tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSettings {
    /// Milliseconds between the success message and leaving the modal.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub booking: BookingSettings,
    #[serde(default)]
    pub features: FeatureFlags,
}
