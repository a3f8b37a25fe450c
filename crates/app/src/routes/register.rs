use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use api_client::session::validate_registration;
use api_client::AuthOutcome;
use dioxus::prelude::*;
use shared_types::RegisterRequest;
use shared_ui::{
    use_toast, Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Form, Input, ToastOptions,
};
use std::collections::HashMap;

/// Account creation. On success the user is signed in and sent to the courts.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Courts {});
        }
    });

    let handle_register = move |_: FormEvent| {
        let api = api.clone();
        async move {
            let data = RegisterRequest {
                email: email().trim().to_string(),
                password: password(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                phone: Some(phone().trim().to_string()).filter(|p| !p.is_empty()),
            };
            error_msg.set(None);

            if let Err(e) = validate_registration(&data) {
                field_errors.set(e.field_errors);
                return;
            }
            field_errors.set(HashMap::new());
            loading.set(true);

            match auth.register(&api, &data).await {
                AuthOutcome::Success(_) => {
                    toast.success("Account created".to_string(), ToastOptions::new());
                }
                AuthOutcome::Failure(msg) => error_msg.set(Some(msg)),
            }
            loading.set(false);
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Register" }
                    CardDescription { "Create an account to start booking courts" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, class: "auth-error", "{err}" }
                    }

                    Form { onsubmit: handle_register,
                        div { class: "auth-row",
                            Input {
                                label: "First Name",
                                id: "first_name",
                                required: true,
                                value: first_name(),
                                error: field_error("first_name"),
                                on_input: move |e: FormEvent| first_name.set(e.value()),
                            }
                            Input {
                                label: "Last Name",
                                id: "last_name",
                                required: true,
                                value: last_name(),
                                error: field_error("last_name"),
                                on_input: move |e: FormEvent| last_name.set(e.value()),
                            }
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            error: field_error("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            placeholder: "At least 6 characters",
                            required: true,
                            value: password(),
                            error: field_error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Input {
                            label: "Phone (optional)",
                            input_type: "tel",
                            id: "phone",
                            value: phone(),
                            on_input: move |e: FormEvent| phone.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            full_width: true,
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Register" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Login here" }
                    }
                }
            }
        }
    }
}
