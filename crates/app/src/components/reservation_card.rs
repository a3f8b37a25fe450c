use dioxus::prelude::*;
use shared_types::Reservation;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle,
};

use super::StatusBadge;
use crate::format_helpers::{format_date_human, format_price, format_time_range};

/// One booking with its status. The cancel button appears only for
/// CONFIRMED reservations when `on_cancel` is set; it receives the id.
#[component]
pub fn ReservationCard(
    reservation: Reservation,
    #[props(default)] on_cancel: Option<EventHandler<String>>,
    /// Shown under the title, e.g. the booking user in the admin list.
    #[props(default)]
    subtitle: Option<String>,
    children: Element,
) -> Element {
    let date = format_date_human(&reservation.date);
    let time = format_time_range(&reservation.start_time, &reservation.end_time);
    let price = format_price(reservation.total_price);
    let cancel = on_cancel.filter(|_| reservation.status.is_cancellable());
    let id = reservation.id.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reservation_card.css") }

        Card { class: "reservation-card",
            CardHeader { class: "reservation-header",
                CardTitle { "{reservation.court_name()}" }
                StatusBadge { status: reservation.status }
            }
            CardContent {
                if let Some(subtitle) = subtitle {
                    p { class: "reservation-subtitle", "{subtitle}" }
                }
                dl { class: "reservation-details",
                    div { class: "detail-row",
                        dt { "Date:" }
                        dd { "{date}" }
                    }
                    div { class: "detail-row",
                        dt { "Time:" }
                        dd { "{time}" }
                    }
                    div { class: "detail-row",
                        dt { "Location:" }
                        dd { "{reservation.court_location()}" }
                    }
                    div { class: "detail-row",
                        dt { "Price:" }
                        dd { "{price}" }
                    }
                    if let Some(notes) = reservation.notes_text() {
                        div { class: "detail-row",
                            dt { "Notes:" }
                            dd { "{notes}" }
                        }
                    }
                }
            }
            CardFooter { class: "reservation-actions",
                {children}
                if let Some(handler) = cancel {
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| handler.call(id.clone()),
                        "Cancel Reservation"
                    }
                }
            }
        }
    }
}
