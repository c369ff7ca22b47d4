//! Sidebar navigation.
//!
//! Renders exactly the menu granted at login, in stored order. A user with
//! no grants gets an empty rail, not a default set. Collapsing is purely
//! visual and touches nothing but local state.

use dioxus::prelude::*;
use store::MenuEntry;

use crate::icons::menu_icon;
use crate::session::use_session;

#[component]
pub fn Sidebar(active_path: String) -> Element {
    let session = use_session();
    let mut collapsed = use_signal(|| false);

    let entries = session.menu();

    rsx! {
        document::Stylesheet { href: crate::UI_CSS }

        aside {
            class: if collapsed() { "sidebar collapsed" } else { "sidebar" },
            div { class: "sidebar-head",
                if !collapsed() {
                    span { class: "sidebar-brand", "Tally" }
                }
                button {
                    class: "sidebar-toggle",
                    title: "Toggle sidebar",
                    onclick: move |_| {
                        let now = collapsed();
                        collapsed.set(!now);
                    },
                    {menu_icon("bars", 16)}
                }
            }
            nav { class: "sidebar-nav",
                for entry in entries {
                    SidebarLink {
                        key: "{entry.path}",
                        active: entry.path == active_path,
                        collapsed: collapsed(),
                        entry,
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(entry: MenuEntry, active: bool, collapsed: bool) -> Element {
    let nav = use_navigator();
    let path = entry.path.clone();

    rsx! {
        button {
            class: if active { "side-link active" } else { "side-link" },
            title: "{entry.label}",
            onclick: move |_| {
                nav.push(path.clone());
            },
            span { class: "side-link-icon", {menu_icon(&entry.icon, 16)} }
            if !collapsed {
                span { class: "side-link-label", "{entry.label}" }
            }
        }
    }
}
