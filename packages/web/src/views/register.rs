//! Account registration page.

use dioxus::prelude::*;
use ui::{push_toast, use_backend, use_toasts, ToastLevel};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let backend = use_backend();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        error.set(None);

        let name = username().trim().to_string();
        let mail = email().trim().to_string();
        let pass = password();

        if name.is_empty() {
            error.set(Some("Username is required".to_string()));
            return;
        }
        if mail.is_empty() || !mail.contains('@') {
            error.set(Some("Enter a valid email".to_string()));
            return;
        }
        if pass.len() < 8 {
            error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }
        if pass != confirm() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        busy.set(true);
        let client = backend.peek().clone();
        spawn(async move {
            match api::auth::register(&client, &name, &mail, &pass).await {
                Ok(()) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Account created, sign in to continue",
                    );
                    nav.push(Route::Login {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit: on_submit,
                h1 { class: "auth-title", "Create account" }
                p { class: "auth-subtitle", "Register for the Tally admin console" }

                label { class: "field",
                    span { "Username" }
                    input {
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "At least 8 characters",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Confirm password" }
                    input {
                        r#type: "password",
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Creating account..." } else { "Sign up" }
                }

                p { class: "auth-alt",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
