use dioxus::prelude::*;
use shared_types::{AvailableSlot, Court, ReservationDraft};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, DialogClose, DialogContent, DialogDescription,
    DialogRoot, DialogTitle, Form, Input, Textarea,
};

use crate::auth::use_api;
use crate::components::{SlotPicker, SlotsState};
use crate::format_helpers::{format_hourly_price, today_iso};
use crate::routes::Route;
use crate::timer::sleep_ms;
use crate::use_booking_settings;

pub const RESERVATION_CREATED: &str = "Reservation created successfully!";
pub const RESERVATION_FAILED: &str = "Failed to create reservation";
/// Longest notes text the form accepts.
pub const NOTES_MAX_LEN: usize = 500;

/// Where the booking form is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BookingPhase {
    Editing,
    Submitting,
    /// Created; the redirect to the reservations page is pending.
    Booked,
}

impl BookingPhase {
    /// The modal stays open once booked so the pending redirect still runs.
    fn can_dismiss(self) -> bool {
        self != BookingPhase::Booked
    }

    fn accepts_submit(self) -> bool {
        self == BookingPhase::Editing
    }
}

/// Booking form for one court. Unmounting it discards the draft, so a
/// reopened modal always starts empty.
#[component]
pub fn ReserveModal(court: Court, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let booking = use_booking_settings();

    // Kept apart from the draft so slot and notes edits do not refetch.
    let mut date = use_signal(String::new);
    let mut draft = use_signal(ReservationDraft::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut success_msg = use_signal(|| Option::<String>::None);
    let mut phase = use_signal(|| BookingPhase::Editing);

    let court_id = court.id.clone();
    let slots_api = api.clone();
    // Restarted on every date change; the previous fetch is dropped with it.
    let slots = use_resource(move || {
        let api = slots_api.clone();
        let court_id = court_id.clone();
        let date = date();
        async move {
            if date.is_empty() {
                return Vec::new();
            }
            match api.get_available_slots(&court_id, &date).await {
                Ok(available) => available.available_slots,
                Err(e) => {
                    tracing::error!(error = %e, %court_id, %date, "failed to load available slots");
                    Vec::new()
                }
            }
        }
    });

    let slots_state = if date.read().is_empty() {
        SlotsState::NoDate
    } else {
        match (&*slots.state().read(), &*slots.read()) {
            (UseResourceState::Pending, _) | (_, None) => SlotsState::Loading,
            (_, Some(list)) => SlotsState::Loaded(list.clone()),
        }
    };
    let selected = draft.read().slot().map(AvailableSlot::key);

    let submit_court_id = court.id.clone();
    let delay_ms = booking.redirect_delay_ms;
    let handle_submit = move |_: FormEvent| {
        let api = api.clone();
        let court_id = submit_court_id.clone();
        async move {
            if !phase().accepts_submit() {
                return;
            }
            error_msg.set(None);
            success_msg.set(None);

            let body = match draft.read().to_request(&court_id) {
                Ok(body) => body,
                Err(e) => {
                    error_msg.set(Some(e.to_string()));
                    return;
                }
            };

            phase.set(BookingPhase::Submitting);
            match api.create_reservation(&body).await {
                Ok(reservation) => {
                    tracing::info!(reservation_id = %reservation.id, "reservation created");
                    phase.set(BookingPhase::Booked);
                    success_msg.set(Some(RESERVATION_CREATED.to_string()));
                    sleep_ms(delay_ms).await;
                    on_close.call(());
                    navigator().push(Route::MyReservations {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "reservation rejected");
                    error_msg.set(Some(e.detail_or(RESERVATION_FAILED)));
                    phase.set(BookingPhase::Editing);
                }
            }
        }
    };

    let summary = format!(
        "{} · {} · {}",
        court.sport_name(),
        court.location,
        format_hourly_price(court.price_per_hour)
    );

    let dismiss = move || {
        if phase().can_dismiss() {
            on_close.call(());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courts.css") }

        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    dismiss();
                }
            },
            DialogContent {
                if phase().can_dismiss() {
                    DialogClose { on_close: move |_| dismiss() }
                }
                DialogTitle { "Reserve {court.name}" }
                DialogDescription { "{summary}" }

                if let Some(err) = error_msg() {
                    Alert { variant: AlertVariant::Error, class: "modal-alert", "{err}" }
                }
                if let Some(msg) = success_msg() {
                    Alert { variant: AlertVariant::Success, class: "modal-alert", "{msg}" }
                }

                Form { onsubmit: handle_submit,
                    Input {
                        label: "Date",
                        input_type: "date",
                        id: "date",
                        required: true,
                        min: today_iso(),
                        value: date(),
                        on_input: move |e: FormEvent| {
                            let value = e.value();
                            draft.write().set_date(value.clone());
                            date.set(value);
                        },
                    }

                    SlotPicker {
                        state: slots_state,
                        selected,
                        on_select: move |slot: AvailableSlot| draft.write().select_slot(slot),
                    }

                    Textarea {
                        label: "Notes (optional)",
                        id: "notes",
                        rows: 3,
                        max_length: NOTES_MAX_LEN,
                        value: draft.read().notes.clone(),
                        on_input: move |e: FormEvent| draft.write().notes = e.value(),
                    }

                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: !phase().can_dismiss(),
                            onclick: move |_| dismiss(),
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            disabled: !phase().accepts_submit(),
                            if phase() == BookingPhase::Submitting { "Reserving..." } else { "Confirm Reservation" }
                        }
                    }
                }
            }
        }
    }
}
