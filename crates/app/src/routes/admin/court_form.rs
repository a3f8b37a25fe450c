use dioxus::prelude::*;
use shared_types::CourtCreate;
use shared_ui::{use_toast, Button, Form, FormField, Input, Textarea, ToastOptions};
use std::collections::HashMap;

use crate::auth::use_api;

/// Raw text of the create-court form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtFormValues {
    pub name: String,
    pub sport_id: String,
    pub location: String,
    pub price_per_hour: String,
    pub capacity: String,
    pub description: String,
    pub image_url: String,
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

/// Turn the form text into a create body, or per-field messages.
pub fn parse_court_form(values: &CourtFormValues) -> Result<CourtCreate, HashMap<String, String>> {
    let mut errors = HashMap::new();

    for (field, value, label) in [
        ("name", &values.name, "Name"),
        ("sport_id", &values.sport_id, "Sport ID"),
        ("location", &values.location, "Location"),
    ] {
        if value.trim().is_empty() {
            errors.insert(field.to_string(), format!("{label} is required"));
        }
    }

    let price = match values.price_per_hour.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p > 0.0 => p,
        _ => {
            errors.insert(
                "price_per_hour".to_string(),
                "Price must be greater than 0".to_string(),
            );
            0.0
        }
    };

    let capacity = match values.capacity.trim().parse::<u32>() {
        Ok(c) if c >= 1 => c,
        _ => {
            errors.insert(
                "capacity".to_string(),
                "Capacity must be a whole number of at least 1".to_string(),
            );
            0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CourtCreate {
        name: values.name.trim().to_string(),
        description: optional(&values.description),
        sport_id: values.sport_id.trim().to_string(),
        location: values.location.trim().to_string(),
        price_per_hour: price,
        capacity,
        image_url: optional(&values.image_url),
    })
}

/// Create-court form. `on_created` fires after the backend accepts it.
#[component]
pub fn CourtForm(on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut values = use_signal(CourtFormValues::default);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        if saving() {
            return;
        }
        let body = match parse_court_form(&values.read()) {
            Ok(body) => body,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(HashMap::new());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_court(&body).await {
                Ok(court) => {
                    tracing::info!(court_id = %court.id, "court created");
                    values.set(CourtFormValues::default());
                    toast.success(format!("Court \"{}\" created", court.name), ToastOptions::new());
                    on_created.call(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to create court");
                    toast.error(e.detail_or("Failed to create court"), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |name: &str| errors.read().get(name).cloned();
    let v = values.read().clone();

    rsx! {
        Form { class: "court-form", onsubmit: handle_submit,
            div { class: "court-form-grid",
                Input {
                    label: "Name",
                    required: true,
                    value: v.name,
                    error: field_error("name"),
                    on_input: move |e: FormEvent| values.write().name = e.value(),
                }
                Input {
                    label: "Sport ID",
                    required: true,
                    value: v.sport_id,
                    error: field_error("sport_id"),
                    on_input: move |e: FormEvent| values.write().sport_id = e.value(),
                }
                Input {
                    label: "Location",
                    required: true,
                    value: v.location,
                    error: field_error("location"),
                    on_input: move |e: FormEvent| values.write().location = e.value(),
                }
                Input {
                    label: "Price per hour",
                    input_type: "number",
                    min: "0.01",
                    required: true,
                    value: v.price_per_hour,
                    error: field_error("price_per_hour"),
                    on_input: move |e: FormEvent| values.write().price_per_hour = e.value(),
                }
                Input {
                    label: "Capacity",
                    input_type: "number",
                    min: "1",
                    required: true,
                    value: v.capacity,
                    error: field_error("capacity"),
                    on_input: move |e: FormEvent| values.write().capacity = e.value(),
                }
                Input {
                    label: "Image URL",
                    input_type: "url",
                    placeholder: "https://",
                    value: v.image_url,
                    on_input: move |e: FormEvent| values.write().image_url = e.value(),
                }
            }
            FormField {
                Textarea {
                    label: "Description",
                    value: v.description,
                    on_input: move |e: FormEvent| values.write().description = e.value(),
                }
            }
            Button { button_type: "submit", disabled: saving(),
                if saving() { "Creating..." } else { "Create Court" }
            }
        }
    }
}
