use serde::{Deserialize, Serialize};

use crate::{Court, User};

/// Lifecycle label assigned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Completed => "COMPLETED",
        }
    }

    /// Only confirmed bookings offer a cancel action.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking. The "with details" endpoints embed the court and user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub court_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<Court>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Reservation {
    pub fn court_name(&self) -> &str {
        self.court.as_ref().map(|c| c.name.as_str()).unwrap_or("Court")
    }

    pub fn court_location(&self) -> &str {
        self.court
            .as_ref()
            .map(|c| c.location.as_str())
            .filter(|loc| !loc.is_empty())
            .unwrap_or("N/A")
    }

    /// Notes, ignoring blank strings.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Body for `POST /api/reservations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationCreate {
    pub court_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Set the reservation with `id` to CANCELLED, leaving every other entry
/// untouched. Returns whether a matching entry was found.
pub fn mark_cancelled(reservations: &mut [Reservation], id: &str) -> bool {
    match reservations.iter_mut().find(|r| r.id == id) {
        Some(reservation) => {
            reservation.status = ReservationStatus::Cancelled;
            true
        }
        None => false,
    }
}
