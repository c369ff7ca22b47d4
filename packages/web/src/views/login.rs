//! Sign-in page.
//!
//! A successful login stores the credential, profile and menu in one step
//! before any navigation happens, so a reload right after landing on the
//! dashboard restores the same session.

use api::ApiError;
use dioxus::prelude::*;
use ui::{use_backend, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let backend = use_backend();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in, go straight to the console.
    if session.is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let name = username().trim().to_string();
        let pass = password();
        if name.is_empty() || pass.is_empty() {
            error.set(Some("Enter a username and password".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let client = backend.peek().clone();
        spawn(async move {
            match api::auth::login(&client, &name, &pass).await {
                Ok(_) => {
                    session.refresh();
                    nav.push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(login_message(&err))),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit: on_submit,
                h1 { class: "auth-title", "Tally" }
                p { class: "auth-subtitle", "Sign in to the admin console" }

                label { class: "field",
                    span { "Username" }
                    input {
                        value: "{username}",
                        autofocus: true,
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }

                p { class: "auth-alt",
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}

fn login_message(error: &ApiError) -> String {
    match error.status_code() {
        Some(400) | Some(401) => "Invalid username or password".to_string(),
        _ => error.to_string(),
    }
}
