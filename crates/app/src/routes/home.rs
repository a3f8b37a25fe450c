use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🏟️",
        title: "Multiple Sports",
        text: "Football, Tennis, Basketball and more",
    },
    Feature {
        icon: "⚡",
        title: "Instant Booking",
        text: "Reserve your court in seconds",
    },
    Feature {
        icon: "💳",
        title: "Easy Payment",
        text: "Secure and convenient payment options",
    },
    Feature {
        icon: "📱",
        title: "Manage Reservations",
        text: "Track and manage all your bookings",
    },
];

/// Landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let anonymous = !auth.is_authenticated();

    rsx! {
        HomeView { anonymous }
    }
}

/// Router-independent body of the landing page.
#[component]
fn HomeView(anonymous: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home",
            section { class: "hero",
                h1 { class: "hero-title", "Welcome to Courts Reservation System" }
                p { class: "hero-subtitle", "Book your favorite sports courts easily and quickly" }
                div { class: "hero-actions",
                    HeroLink { to: Route::Courts {}, class: "button hero-primary", "Browse Courts" }
                    if anonymous {
                        HeroLink { to: Route::Register {}, class: "button hero-secondary", "Get Started" }
                    }
                }
            }

            section { class: "features",
                h2 { "Why Choose Us?" }
                div { class: "features-grid",
                    for feature in FEATURES.iter() {
                        div { key: "{feature.title}", class: "feature-card",
                            div { class: "feature-icon", "{feature.icon}" }
                            h3 { "{feature.title}" }
                            p { "{feature.text}" }
                        }
                    }
                }
            }
        }
    }
}

/// Router link, rendered as a plain anchor when no router is mounted.
#[component]
fn HeroLink(to: Route, class: String, children: Element) -> Element {
    if try_router().is_some() {
        rsx! { Link { to, class, {children} } }
    } else {
        rsx! { a { href: "{to}", class, {children} } }
    }
}
