//! Session context shared by the whole component tree.
//!
//! [`SessionProvider`] owns the [`SessionContext`] for the app: localStorage
//! in the browser, an in-memory store elsewhere. The context itself is shared
//! state with interior mutability; wrapping it in a signal is what lets the
//! navbar and sidebar re-render after a login or logout lands. Components
//! read it through [`use_session`].

use std::sync::Arc;

use dioxus::prelude::*;
use store::{MenuEntry, PermissionSet, SessionContext, UserProfile};

fn session_context() -> SessionContext {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionContext::new(Arc::new(store::LocalStore::new()))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionContext::new(Arc::new(store::MemoryStore::new()))
    }
}

/// Restores any persisted session and provides it to descendants.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(session_context);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Handle over the shared session. Copy, so it moves freely into event
/// handlers and spawned tasks.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    inner: Signal<SessionContext>,
}

impl SessionHandle {
    /// Owned handle to the same underlying session, for handing to the API
    /// client or `api::auth` calls.
    pub fn context(&self) -> SessionContext {
        self.inner.peek().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.inner.read().profile()
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        self.inner.read().menu()
    }

    pub fn permissions(&self) -> PermissionSet {
        self.inner.read().permissions()
    }

    /// Wake subscribers after the session was mutated through
    /// [`api::auth::login`] or [`api::auth::logout`].
    pub fn refresh(&mut self) {
        self.inner.write();
    }
}

/// Access the session provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    SessionHandle {
        inner: use_context::<Signal<SessionContext>>(),
    }
}
