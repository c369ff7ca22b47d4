//! Top bar: username and sign-out.
//!
//! Sign-out is local-first. The stored session is destroyed synchronously,
//! so the UI never waits on the network to forget who was signed in; the
//! backend notification rides along afterwards and may fail freely.

use dioxus::prelude::*;

use crate::backend::use_backend;
use crate::session::use_session;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let backend = use_backend();
    let nav = use_navigator();

    let username = session.profile().map(|p| p.username);

    let on_logout = move |_| {
        let credential = api::auth::logout(&session.context());
        if let Some(credential) = credential {
            let client = backend.peek().clone();
            spawn(async move {
                api::auth::notify_logout(&client, credential).await;
            });
        }
        session.refresh();
        nav.push("/login");
    };

    rsx! {
        document::Stylesheet { href: crate::UI_CSS }

        header { class: "navbar",
            span { class: "navbar-title", "Admin console" }
            div { class: "navbar-user",
                if let Some(username) = username {
                    span { class: "navbar-username", "{username}" }
                }
                button { class: "btn btn-ghost", onclick: on_logout, "Sign out" }
            }
        }
    }
}
