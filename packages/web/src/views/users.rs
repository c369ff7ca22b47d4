//! Registered accounts, listed read-only.

use api::UserRecord;
use dioxus::prelude::*;
use ui::use_resource_screen;

#[component]
pub fn Users() -> Element {
    let screen = use_resource_screen::<UserRecord>();
    let state = screen.state();

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Users" }
            }

            section { class: "panel",
                if state.is_loading() {
                    p { class: "muted", "Loading..." }
                } else if state.records().is_empty() {
                    p { class: "muted", "No users found." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Username" }
                                th { "Email" }
                            }
                        }
                        tbody {
                            for record in state.records().to_vec() {
                                tr { key: "{record.id}",
                                    td { class: "muted", "{record.id}" }
                                    td { "{record.username}" }
                                    td { "{record.email}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
