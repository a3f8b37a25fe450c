use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ReservationCreate;

/// One bookable interval for a court on a given date. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailableSlot {
    pub start: String,
    pub end: String,
    pub label: String,
}

impl AvailableSlot {
    /// Stable identity of the slot, "HH:MM-HH:MM".
    pub fn key(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Response of `GET /api/courts/{id}/available-slots?date=`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlots {
    #[serde(default)]
    pub court_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub available_slots: Vec<AvailableSlot>,
    #[serde(default)]
    pub reserved_count: u32,
}

/// Local validation failures of the reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingSlot,
    InvalidDate,
    InvalidSlotTime,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingSlot => write!(f, "Please select a time slot"),
            DraftError::InvalidDate => write!(f, "Please select a valid date"),
            DraftError::InvalidSlotTime => write!(f, "The selected time slot is invalid"),
        }
    }
}

impl std::error::Error for DraftError {}

const DATE_FORMAT: &str = "%Y-%m-%d";
const SLOT_FORMAT: &str = "%H:%M";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// State of the reservation modal: a date, at most one selected slot, notes.
///
/// Changing the date always drops the selected slot since slots are only
/// meaningful for the date they were fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationDraft {
    date: String,
    slot: Option<AvailableSlot>,
    pub notes: String,
}

impl ReservationDraft {
    pub fn slot(&self) -> Option<&AvailableSlot> {
        self.slot.as_ref()
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        self.slot = None;
    }

    pub fn select_slot(&mut self, slot: AvailableSlot) {
        self.slot = Some(slot);
    }

    pub fn is_selected(&self, slot: &AvailableSlot) -> bool {
        self.slot.as_ref().is_some_and(|s| s.key() == slot.key())
    }

    /// Combine the date and the selected slot into the create body.
    pub fn to_request(&self, court_id: &str) -> Result<ReservationCreate, DraftError> {
        let slot = self.slot.as_ref().ok_or(DraftError::MissingSlot)?;
        let date =
            NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| DraftError::InvalidDate)?;
        let start = NaiveTime::parse_from_str(&slot.start, SLOT_FORMAT)
            .map_err(|_| DraftError::InvalidSlotTime)?;
        let end = NaiveTime::parse_from_str(&slot.end, SLOT_FORMAT)
            .map_err(|_| DraftError::InvalidSlotTime)?;

        let notes = self.notes.trim();
        Ok(ReservationCreate {
            court_id: court_id.to_string(),
            date: date.format(DATE_FORMAT).to_string(),
            start_time: date.and_time(start).format(TIMESTAMP_FORMAT).to_string(),
            end_time: date.and_time(end).format(TIMESTAMP_FORMAT).to_string(),
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        })
    }
}
