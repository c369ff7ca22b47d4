//! This crate contains all shared UI for the workspace: the session and
//! backend providers, the route guard, the generic collection-screen hook,
//! and the chrome (sidebar, navbar, dialogs, toasts) the web views compose.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use session::{use_session, SessionHandle, SessionProvider};

mod backend;
pub use backend::{use_backend, Backend, BackendProvider};

mod guard;
pub use guard::RouteGuard;

mod screen;
pub use screen::{use_resource_screen, ScreenHandle};

pub mod icons;
pub use icons::menu_icon;

mod sidebar;
pub use sidebar::Sidebar;

mod navbar;
pub use navbar::Navbar;

mod dialogs;
pub use dialogs::{ConfirmDialog, ModalOverlay};

pub mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};
