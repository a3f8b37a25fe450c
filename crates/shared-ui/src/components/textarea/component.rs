use dioxus::prelude::*;

/// Multi-line input. With `max_length` set, input is capped and a
/// "used/max" counter is shown under the field.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] max_length: Option<usize>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let used = value.chars().count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                value,
                rows: rows as i64,
                maxlength: max_length.map(|m| m as i64),
                placeholder,
                disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(max) = max_length {
                span {
                    class: "textarea-counter",
                    "data-full": used >= max,
                    "{used}/{max}"
                }
            }
        }
    }
}
