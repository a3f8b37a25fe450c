use dioxus::prelude::*;
use shared_types::{mark_cancelled, Reservation};
use shared_ui::{
    use_toast, Alert, AlertVariant, Button, ButtonVariant, ConfirmDialog, PageHeader,
    PageSubtitle, PageTitle, SkeletonGrid, ToastOptions,
};

use super::{CANCEL_CONFIRM, CANCEL_FAILED};
use crate::auth::use_api;
use crate::components::ReservationCard;
use crate::routes::Route;

/// Result of the one-shot reservations fetch.
#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Failed,
    Ready(Vec<Reservation>),
}

#[component]
pub fn MyReservations() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut state = use_signal(|| ListState::Loading);
    let mut pending_cancel = use_signal(|| Option::<String>::None);
    let mut cancelling = use_signal(|| false);

    let load_api = api.clone();
    use_future(move || {
        let api = load_api.clone();
        async move {
            match api.get_my_reservations().await {
                Ok(list) => state.set(ListState::Ready(list)),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load reservations");
                    state.set(ListState::Failed);
                }
            }
        }
    });

    // Only the cancelled entry changes; the list is not refetched.
    let handle_confirm = move |_| {
        let Some(id) = pending_cancel() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            cancelling.set(true);
            match api.cancel_reservation(&id).await {
                Ok(resp) => {
                    if let ListState::Ready(list) = &mut *state.write() {
                        mark_cancelled(list, &id);
                    }
                    toast.success(resp.message, ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!(error = %e, reservation_id = %id, "cancel failed");
                    toast.error(CANCEL_FAILED.to_string(), ToastOptions::new());
                }
            }
            cancelling.set(false);
            pending_cancel.set(None);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reservations.css") }

        div { class: "reservations-page",
            PageHeader {
                PageTitle { "My Reservations" }
                PageSubtitle { "Upcoming and past bookings" }
            }

            match state() {
                ListState::Loading => rsx! {
                    SkeletonGrid { count: 2, message: "Loading reservations..." }
                },
                ListState::Failed => rsx! {
                    Alert { variant: AlertVariant::Error, "Failed to load reservations" }
                },
                ListState::Ready(list) if list.is_empty() => rsx! {
                    Alert { variant: AlertVariant::Info, class: "reservations-empty",
                        "You don't have any reservations yet."
                    }
                    Link { to: Route::Courts {},
                        Button { variant: ButtonVariant::Primary, "Browse Courts" }
                    }
                },
                ListState::Ready(list) => rsx! {
                    div { class: "reservations-list",
                        for reservation in list {
                            ReservationCard {
                                key: "{reservation.id}",
                                on_cancel: move |id: String| pending_cancel.set(Some(id)),
                                reservation,
                            }
                        }
                    }
                },
            }

            ConfirmDialog {
                open: pending_cancel.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open && !cancelling() {
                        pending_cancel.set(None);
                    }
                },
                on_confirm: handle_confirm,
                title: "Cancel reservation",
                message: CANCEL_CONFIRM,
                confirm_label: if cancelling() { "Cancelling..." } else { "Yes, cancel" },
                cancel_label: "Keep it",
                busy: cancelling(),
            }
        }
    }
}
