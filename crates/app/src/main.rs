use api_client::{app_config, session, ApiClient};
use dioxus::prelude::*;
use shared_types::{BookingSettings, FeatureFlags};

mod auth;
mod components;
mod format_helpers;
mod routes;
mod timer;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = app_config();
    let api = use_context_provider(ApiClient::from_config);
    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.booking.clone());
    let mut auth = use_context_provider(AuthState::new);

    // Resolve the stored token into a profile once, before guarded routes render.
    use_hook(move || {
        spawn(async move {
            let status = session::restore_session(&api).await;
            auth.session.set(status);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Courts Reservation" }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Booking settings from context.
pub fn use_booking_settings() -> BookingSettings {
    use_context::<BookingSettings>()
}

/// Feature flags from context.
pub fn use_feature_flags() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
