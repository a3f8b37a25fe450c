use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_types::Court;
use shared_ui::{Alert, AlertVariant, Skeleton};

use super::ReserveModal;
use crate::auth::{use_api, use_auth};
use crate::components::CourtCard;
use crate::routes::Route;

#[component]
pub fn CourtDetail(id: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut reserving = use_signal(|| Option::<Court>::None);

    let court_id = id.clone();
    let data = use_resource(move || {
        let api = api.clone();
        let id = court_id.clone();
        async move {
            api.get_court_by_id(&id)
                .await
                .inspect_err(|e| tracing::error!(error = %e, court_id = %id, "failed to load court"))
        }
    });

    let handle_reserve = move |court: Court| {
        if !auth.is_authenticated() {
            navigator().push(Route::Login {});
            return;
        }
        reserving.set(Some(court));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courts.css") }

        div { class: "court-detail-page",
            Link { to: Route::Courts {}, class: "back-link",
                Icon { icon: LdArrowLeft, width: 16, height: 16 }
                "Back to Courts"
            }

            match &*data.read() {
                None => rsx! {
                    Skeleton { style: "height: 420px; max-width: 560px;" }
                },
                Some(Err(_)) => rsx! {
                    Alert { variant: AlertVariant::Error, "Court not found" }
                },
                Some(Ok(court)) => rsx! {
                    div { class: "court-detail-card",
                        CourtCard { court: court.clone(), on_reserve: handle_reserve, linked: false }
                    }
                },
            }

            if let Some(court) = reserving() {
                ReserveModal { court, on_close: move |_| reserving.set(None) }
            }
        }
    }
}
