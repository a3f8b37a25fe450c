use dioxus::prelude::*;
use shared_types::Court;
use shared_ui::components::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardMedia, CardTitle,
};

use crate::format_helpers::format_hourly_price;
use crate::routes::Route;

/// Summary card for one court. The reserve button only renders when
/// `on_reserve` is set.
#[component]
pub fn CourtCard(
    court: Court,
    #[props(default)] on_reserve: Option<EventHandler<Court>>,
    /// Link the title to the court's detail page.
    #[props(default = true)]
    linked: bool,
) -> Element {
    let image = court.image().map(str::to_string);
    let capacity = format!("{} people", court.capacity);
    let price = format_hourly_price(court.price_per_hour);
    let reserve_target = court.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./court_card.css") }

        Card { class: "court-card",
            CardMedia { src: image, alt: court.name.clone(),
                span { class: "court-image-placeholder", "🏟️" }
            }
            CardHeader {
                CardTitle {
                    if linked {
                        Link { to: Route::CourtDetail { id: court.id.clone() }, "{court.name}" }
                    } else {
                        "{court.name}"
                    }
                }
                Badge { variant: BadgeVariant::Secondary, class: "court-sport", "{court.sport_name()}" }
            }
            CardContent {
                CardDescription { "{court.description_text()}" }
                dl { class: "court-details",
                    div { class: "court-detail",
                        dt { "Location:" }
                        dd { "{court.location}" }
                    }
                    div { class: "court-detail",
                        dt { "Capacity:" }
                        dd { "{capacity}" }
                    }
                    div { class: "court-detail",
                        dt { "Price:" }
                        dd { "{price}" }
                    }
                }
            }
            if let Some(handler) = on_reserve {
                CardFooter {
                    Button {
                        full_width: true,
                        onclick: move |_| handler.call(reserve_target.clone()),
                        "Reserve Now"
                    }
                }
            }
        }
    }
}
