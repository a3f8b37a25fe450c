use serde::{Deserialize, Serialize};

/// Label shown when a court arrives without its sport.
pub const UNKNOWN_SPORT: &str = "Unknown Sport";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Sport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bookable court as returned by `/api/courts`.
///
/// Everything except `id` and `name` is optional on the wire; the client
/// only substitutes display fallbacks and never validates these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Court {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<Sport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Court {
    pub fn sport_name(&self) -> &str {
        self.sport
            .as_ref()
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_SPORT)
    }

    /// The image URL, ignoring blank strings.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Body for `POST /api/courts` (admin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CourtCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sport_id: String,
    pub location: String,
    pub price_per_hour: f64,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body for `PUT /api/courts/{id}` (admin). Unset fields are left untouched
/// by the backend, so they are omitted from the JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CourtUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
