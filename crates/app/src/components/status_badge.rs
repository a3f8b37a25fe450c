use dioxus::prelude::*;
use shared_types::ReservationStatus;
use shared_ui::components::{Badge, BadgeVariant};

pub fn status_variant(status: ReservationStatus) -> BadgeVariant {
    match status {
        ReservationStatus::Confirmed => BadgeVariant::Success,
        ReservationStatus::Cancelled => BadgeVariant::Destructive,
        ReservationStatus::Completed => BadgeVariant::Secondary,
        ReservationStatus::Pending => BadgeVariant::Warning,
    }
}

#[component]
pub fn StatusBadge(status: ReservationStatus) -> Element {
    let class = format!("status-badge status-{}", status.as_str().to_lowercase());
    rsx! {
        Badge { variant: status_variant(status), class: "{class}", "{status.as_str()}" }
    }
}
