use dioxus::prelude::*;
use shared_types::AvailableSlot;
use shared_ui::components::{Alert, AlertVariant};

/// What the picker currently knows about availability.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotsState {
    NoDate,
    Loading,
    Loaded(Vec<AvailableSlot>),
}

/// Grid of one-hour slot buttons. `selected` is the [`AvailableSlot::key`]
/// of the chosen slot.
#[component]
pub fn SlotPicker(
    state: SlotsState,
    #[props(default)] selected: Option<String>,
    on_select: EventHandler<AvailableSlot>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./slot_picker.css") }

        div { class: "slot-picker",
            span { class: "field-label", "Select Time Slot (1 hour)" }
            match state {
                SlotsState::NoDate => rsx! {
                    Alert { variant: AlertVariant::Info, "Please select a date first" }
                },
                SlotsState::Loading => rsx! {
                    div { class: "loading-slots", role: "status", "Loading available slots..." }
                },
                SlotsState::Loaded(slots) if slots.is_empty() => rsx! {
                    Alert { variant: AlertVariant::Error, class: "slots-empty", "No available slots for this date" }
                },
                SlotsState::Loaded(slots) => rsx! {
                    div { class: "time-slots-grid",
                        {slots.into_iter().map(|slot| {
                            let key = slot.key();
                            let is_selected = selected.as_deref() == Some(key.as_str());
                            rsx! {
                                SlotButton { key: "{key}", slot, is_selected, on_select }
                            }
                        })}
                    }
                },
            }
        }
    }
}

#[component]
fn SlotButton(slot: AvailableSlot, is_selected: bool, on_select: EventHandler<AvailableSlot>) -> Element {
    let label = slot.label.clone();
    rsx! {
        button {
            r#type: "button",
            class: if is_selected { "time-slot-btn selected" } else { "time-slot-btn" },
            "aria-pressed": is_selected,
            onclick: move |_| on_select.call(slot.clone()),
            "{label}"
        }
    }
}
