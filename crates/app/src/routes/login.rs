use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use api_client::session::validate_login;
use api_client::AuthOutcome;
use dioxus::prelude::*;
use shared_types::{LoginRequest, User};
use shared_ui::{
    use_toast, Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Form, Input, ToastOptions,
};
use std::collections::HashMap;

/// Email/password sign in. Signed-in visitors are sent on to the courts.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);
    let toast = use_toast();

    // Also fires right after a successful login below.
    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Courts {});
        }
    });

    let handle_login = move |_: FormEvent| {
        let api = api.clone();
        async move {
            let form = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            error_msg.set(None);

            if let Err(e) = validate_login(&form) {
                field_errors.set(e.field_errors);
                return;
            }
            field_errors.set(HashMap::new());
            loading.set(true);

            match auth.login(&api, &form.email, &form.password).await {
                AuthOutcome::Success(user) => {
                    toast.success(welcome_message(&user), ToastOptions::new());
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
                    CardTitle { "Login" }
                    CardDescription { "Sign in to book and manage your courts" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, class: "auth-error", "{err}" }
                    }

                    Form { onsubmit: handle_login,
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
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            error: field_error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            full_width: true,
                            disabled: loading(),
                            if loading() { "Logging in..." } else { "Login" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Register here" }
                    }
                }
            }
        }
    }
}

/// Toast text after a successful sign in.
pub fn welcome_message(user: &User) -> String {
    format!("Welcome back, {}!", user.display_name())
}
