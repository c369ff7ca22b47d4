//! Shared API client.

use api::{ApiClient, ReqwestHttp};
use dioxus::prelude::*;

use crate::session::use_session;

/// The one client type the console talks to the backend with.
pub type Backend = ApiClient<ReqwestHttp>;

/// Builds the [`Backend`] client against `base_url` and provides it to
/// descendants. Must sit inside a [`crate::SessionProvider`] so the client
/// can attach credentials and destroy the session on a 401.
#[component]
pub fn BackendProvider(base_url: String, children: Element) -> Element {
    let session = use_session();
    let backend = use_signal(move || {
        ApiClient::new(base_url.clone(), session.context(), ReqwestHttp::new())
    });
    use_context_provider(|| backend);

    rsx! {
        {children}
    }
}

/// Access the client provided by [`BackendProvider`].
pub fn use_backend() -> Signal<Backend> {
    use_context::<Signal<Backend>>()
}
