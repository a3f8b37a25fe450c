use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_ui::{use_toast, Alert, AlertVariant, ConfirmDialog, Skeleton, ToastOptions};

use super::{CANCEL_CONFIRM, CANCEL_FAILED};
use crate::auth::use_api;
use crate::components::ReservationCard;
use crate::format_helpers::format_datetime_human;
use crate::routes::Route;

#[component]
pub fn ReservationDetail(id: String) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut confirm_open = use_signal(|| false);
    let mut cancelling = use_signal(|| false);

    let load_api = api.clone();
    let reservation_id = id.clone();
    let mut data = use_resource(move || {
        let api = load_api.clone();
        let id = reservation_id.clone();
        async move {
            api.get_reservation_by_id(&id).await.inspect_err(
                |e| tracing::error!(error = %e, reservation_id = %id, "failed to load reservation"),
            )
        }
    });

    let handle_confirm = move |_| {
        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            cancelling.set(true);
            match api.cancel_reservation(&id).await {
                Ok(resp) => {
                    toast.success(resp.message, ToastOptions::new());
                    data.restart();
                }
                Err(e) => {
                    tracing::error!(error = %e, reservation_id = %id, "cancel failed");
                    toast.error(CANCEL_FAILED.to_string(), ToastOptions::new());
                }
            }
            cancelling.set(false);
            confirm_open.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reservations.css") }

        div { class: "reservation-detail-page",
            Link { to: Route::MyReservations {}, class: "back-link",
                Icon { icon: LdArrowLeft, width: 16, height: 16 }
                "Back to My Reservations"
            }

            match &*data.read() {
                None => rsx! {
                    Skeleton { style: "height: 260px; max-width: 560px;" }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.detail_or(\"Reservation not found\")}" }
                },
                Some(Ok(reservation)) => rsx! {
                    div { class: "reservation-detail-card",
                        ReservationCard {
                            reservation: reservation.clone(),
                            on_cancel: move |_: String| confirm_open.set(true),
                            if let Some(created) = reservation.created_at.as_deref() {
                                span { class: "reservation-created",
                                    "Booked {format_datetime_human(created)}"
                                }
                            }
                        }
                    }
                },
            }

            ConfirmDialog {
                open: confirm_open(),
                on_open_change: move |open: bool| {
                    if !cancelling() {
                        confirm_open.set(open);
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
