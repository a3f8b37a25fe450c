use api_client::SessionStatus;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_ui::components::{Button, ButtonVariant};

use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use crate::use_feature_flags;

/// Links shown in the menu, in order, for a given session.
pub fn menu_links(session: &SessionStatus, admin_console: bool) -> Vec<(&'static str, Route)> {
    let mut links = vec![("Courts", Route::Courts {})];
    if session.is_authenticated() {
        links.push(("My Reservations", Route::MyReservations {}));
        if admin_console && session.is_admin() {
            links.push(("Admin", Route::Admin {}));
        }
    }
    links
}

#[component]
pub fn Navbar() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let flags = use_feature_flags();

    let session = auth.session.read().clone();
    let links = menu_links(&session, flags.admin_console);

    let handle_logout = move |_: MouseEvent| {
        auth.logout(&api);
        navigator().push(Route::Home {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./navbar.css") }

        nav { class: "navbar",
            div { class: "navbar-container",
                Link { to: Route::Home {}, class: "navbar-brand", "🏟️ Courts Reservation" }

                div { class: "navbar-menu",
                    for (label, to) in links {
                        Link { key: "{label}", to, class: "nav-link", active_class: "active", "{label}" }
                    }

                    match session {
                        SessionStatus::Authenticated(user) => rsx! {
                            div { class: "nav-user",
                                span { class: "user-name", "{user.first_name} {user.last_name}" }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: handle_logout,
                                    Icon { icon: LdLogOut, width: 16, height: 16 }
                                    "Logout"
                                }
                            }
                        },
                        SessionStatus::Anonymous => rsx! {
                            Link { to: Route::Login {}, class: "nav-link", "Login" }
                            Link { to: Route::Register {}, class: "button nav-cta", "Register" }
                        },
                        SessionStatus::Loading => rsx! {},
                    }
                }
            }
        }
    }
}
