use dioxus::prelude::*;

/// Pulsing placeholder block. Size it with `style` or a class.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
        }
    }
}

/// A grid of card-shaped skeletons with a visible status message.
#[component]
pub fn SkeletonGrid(#[props(default = 3)] count: usize, message: String) -> Element {
    rsx! {
        div { class: "skeleton-grid", role: "status",
            p { class: "skeleton-message", "{message}" }
            for i in 0..count {
                div { key: "{i}", class: "skeleton-card",
                    Skeleton { style: "height: 140px;" }
                    Skeleton { style: "height: 1.25rem; width: 60%;" }
                    Skeleton { style: "height: 1rem; width: 85%;" }
                }
            }
        }
    }
}
