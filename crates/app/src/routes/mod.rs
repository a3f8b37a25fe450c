pub mod admin;
pub mod courts;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reservations;

use crate::auth::use_auth;
use crate::components::Navbar;
use api_client::SessionStatus;
use dioxus::prelude::*;

use admin::Admin;
use courts::{CourtDetail, Courts};
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;
use reservations::{MyReservations, ReservationDetail};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/courts")]
        Courts {},
        #[route("/courts/:id")]
        CourtDetail { id: String },
        #[layout(RequireAuth)]
            #[route("/my-reservations")]
            MyReservations {},
            #[route("/my-reservations/:id")]
            ReservationDetail { id: String },
            #[route("/admin")]
            Admin {},
        #[end_layout]
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

/// Navbar above every page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "container",
            Outlet::<Route> {}
        }
    }
}

/// Renders the child route only for a signed-in user; everyone else is
/// sent to the login page once the startup session check settles.
#[component]
fn RequireAuth() -> Element {
    let auth = use_auth();

    use_effect(move || {
        if matches!(*auth.session.read(), SessionStatus::Anonymous) {
            navigator().replace(Route::Login {});
        }
    });

    let status = auth.session.read().clone();
    match status {
        SessionStatus::Authenticated(_) => rsx! { Outlet::<Route> {} },
        SessionStatus::Anonymous => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        },
        SessionStatus::Loading => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}
