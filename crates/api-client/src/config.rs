use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, baked in at compile time since the
/// browser build has no filesystem.
const CONFIG_SOURCE: &str = include_str!("../../../config.toml");

/// Build-time override for the backend URL.
const API_URL_OVERRIDE: Option<&str> = option_env!("COURTS_API_URL");

/// Parse a config document, applying the `COURTS_API_URL` override.
///
/// Unparseable input falls back to defaults.
pub fn parse_config(source: &str, api_url_override: Option<&str>) -> AppConfig {
    let mut config: AppConfig = toml::from_str(source).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        AppConfig::default()
    });
    if let Some(url) = api_url_override.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config
}

/// The loaded configuration. Parsed on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_SOURCE, API_URL_OVERRIDE);
        tracing::debug!(base_url = %config.api.base_url, flags = ?config.features, "config loaded");
        config
    })
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}
