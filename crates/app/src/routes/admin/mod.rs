mod court_form;

pub use court_form::CourtForm;

use dioxus::prelude::*;
use shared_types::{Court, CourtUpdate};
use shared_ui::{
    use_toast, Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, CardHeader, CardTitle, ConfirmDialog, PageHeader, PageSubtitle, PageTitle,
    SkeletonGrid, ToastOptions,
};

use crate::auth::{use_api, use_auth};
use crate::components::ReservationCard;
use crate::format_helpers::format_hourly_price;
use crate::use_feature_flags;

pub const ACCESS_DENIED: &str = "You do not have access to the admin console.";

/// Whether the admin console is reachable for this session.
pub fn admin_console_enabled(is_admin: bool, flag: bool) -> bool {
    is_admin && flag
}

/// Court management and the full reservation list.
#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let flags = use_feature_flags();

    if !admin_console_enabled(auth.is_admin(), flags.admin_console) {
        return rsx! {
            Alert { variant: AlertVariant::Error, "{ACCESS_DENIED}" }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Admin" }
                PageSubtitle { "Manage courts and review every booking" }
            }
            AdminCourts {}
            AdminReservations {}
        }
    }
}

#[component]
fn AdminCourts() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut pending_delete = use_signal(|| Option::<Court>::None);
    let mut deleting = use_signal(|| false);

    let load_api = api.clone();
    let mut courts = use_resource(move || {
        let api = load_api.clone();
        async move {
            api.get_all_courts()
                .await
                .inspect_err(|e| tracing::error!(error = %e, "failed to load courts"))
        }
    });

    let toggle_api = api.clone();
    let toggle_active = move |court: Court| {
        let api = toggle_api.clone();
        spawn(async move {
            let update = CourtUpdate {
                is_active: Some(!court.is_active),
                ..Default::default()
            };
            match api.update_court(&court.id, &update).await {
                Ok(updated) => {
                    let state = if updated.is_active { "activated" } else { "deactivated" };
                    toast.success(format!("{} {state}", updated.name), ToastOptions::new());
                    courts.restart();
                }
                Err(e) => {
                    tracing::error!(error = %e, court_id = %court.id, "failed to update court");
                    toast.error(e.detail_or("Failed to update court"), ToastOptions::new());
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(court) = pending_delete() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            deleting.set(true);
            match api.delete_court(&court.id).await {
                Ok(()) => {
                    toast.success(format!("{} deleted", court.name), ToastOptions::new());
                    courts.restart();
                }
                Err(e) => {
                    tracing::error!(error = %e, court_id = %court.id, "failed to delete court");
                    toast.error(e.detail_or("Failed to delete court"), ToastOptions::new());
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let confirm_message = pending_delete
        .read()
        .as_ref()
        .map(|c| format!("Delete {}? Existing reservations may be affected.", c.name))
        .unwrap_or_default();

    rsx! {
        section { class: "admin-section",
            h2 { class: "admin-section-title", "Courts" }

            Card { class: "admin-create",
                CardHeader {
                    CardTitle { "New court" }
                }
                CardContent {
                    CourtForm { on_created: move |_| courts.restart() }
                }
            }

            match &*courts.read() {
                None => rsx! {
                    SkeletonGrid { count: 2, message: "Loading courts..." }
                },
                Some(Err(_)) => rsx! {
                    Alert { variant: AlertVariant::Error, "Failed to load courts" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Alert { variant: AlertVariant::Info, "No courts yet." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Sport" }
                                th { "Location" }
                                th { "Price" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for court in list.iter().cloned() {
                                AdminCourtRow {
                                    key: "{court.id}",
                                    court,
                                    on_toggle: toggle_active.clone(),
                                    on_delete: move |c: Court| pending_delete.set(Some(c)),
                                }
                            }
                        }
                    }
                },
            }

            ConfirmDialog {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open && !deleting() {
                        pending_delete.set(None);
                    }
                },
                on_confirm: handle_delete,
                title: "Delete court",
                message: confirm_message,
                confirm_label: if deleting() { "Deleting..." } else { "Delete" },
                busy: deleting(),
            }
        }
    }
}

#[component]
fn AdminCourtRow(
    court: Court,
    on_toggle: EventHandler<Court>,
    on_delete: EventHandler<Court>,
) -> Element {
    let (status, variant) = if court.is_active {
        ("Active", BadgeVariant::Success)
    } else {
        ("Inactive", BadgeVariant::Outline)
    };
    let toggle_label = if court.is_active { "Deactivate" } else { "Activate" };
    let toggle_target = court.clone();
    let delete_target = court.clone();

    rsx! {
        tr {
            td { "{court.name}" }
            td { "{court.sport_name()}" }
            td { "{court.location}" }
            td { "{format_hourly_price(court.price_per_hour)}" }
            td {
                Badge { variant, "{status}" }
            }
            td { class: "admin-row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_toggle.call(toggle_target.clone()),
                    "{toggle_label}"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn AdminReservations() -> Element {
    let api = use_api();

    let reservations = use_resource(move || {
        let api = api.clone();
        async move {
            api.get_all_reservations()
                .await
                .inspect_err(|e| tracing::error!(error = %e, "failed to load all reservations"))
        }
    });

    rsx! {
        section { class: "admin-section",
            h2 { class: "admin-section-title", "All reservations" }

            match &*reservations.read() {
                None => rsx! {
                    SkeletonGrid { count: 2, message: "Loading reservations..." }
                },
                Some(Err(_)) => rsx! {
                    Alert { variant: AlertVariant::Error, "Failed to load reservations" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Alert { variant: AlertVariant::Info, "No reservations yet." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "admin-reservations",
                        for reservation in list.iter().cloned() {
                            ReservationCard {
                                key: "{reservation.id}",
                                subtitle: reservation.user.as_ref().map(|u| format!("{} ({})", u.display_name(), u.email)),
                                reservation,
                            }
                        }
                    }
                },
            }
        }
    }
}
