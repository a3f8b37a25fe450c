use dioxus::prelude::*;
use shared_types::Court;
use shared_ui::{Alert, AlertVariant, PageHeader, PageSubtitle, PageTitle, SkeletonGrid};

use super::ReserveModal;
use crate::auth::{use_api, use_auth};
use crate::components::CourtCard;
use crate::routes::Route;

pub const COURTS_LOADING: &str = "Loading courts...";
pub const COURTS_EMPTY: &str = "No courts available at the moment.";
pub const COURTS_FAILED: &str = "Failed to load courts";

#[component]
pub fn Courts() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut selected = use_signal(|| Option::<Court>::None);

    let courts = use_resource(move || {
        let api = api.clone();
        async move {
            api.get_all_courts()
                .await
                .inspect_err(|e| tracing::error!(error = %e, "failed to load courts"))
        }
    });

    // Anonymous visitors are sent to log in instead of opening the modal.
    let handle_reserve = move |court: Court| {
        if !auth.is_authenticated() {
            navigator().push(Route::Login {});
            return;
        }
        selected.set(Some(court));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courts.css") }

        div { class: "courts-page",
            PageHeader {
                PageTitle { "Available Courts" }
                PageSubtitle { "Pick a court and reserve a one-hour slot" }
            }

            match &*courts.read() {
                None => rsx! {
                    SkeletonGrid { message: "{COURTS_LOADING}" }
                },
                Some(Err(_)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{COURTS_FAILED}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Alert { variant: AlertVariant::Info, "{COURTS_EMPTY}" }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "courts-grid",
                        for court in list.iter().cloned() {
                            CourtCard { key: "{court.id}", court, on_reserve: handle_reserve }
                        }
                    }
                },
            }

            if let Some(court) = selected() {
                ReserveModal { court, on_close: move |_| selected.set(None) }
            }
        }
    }
}
