//! Landing page for navigation outside the granted menu.
//!
//! Reaching this page means the session is valid but the menu does not
//! include the requested path, so it stays inside the admin shell.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PermissionDenied() -> Element {
    rsx! {
        div { class: "page denied-page",
            section { class: "panel denied-panel",
                h2 { class: "page-title", "No access" }
                p { class: "muted",
                    "Your account does not have permission to view that page."
                }
                p { class: "muted",
                    "If you need it, ask an administrator to add it to your menu."
                }
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Back to dashboard" }
            }
        }
    }
}
