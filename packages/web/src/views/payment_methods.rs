//! Payment methods, listed read-only. The set is seeded backend-side.

use api::PaymentMethod;
use dioxus::prelude::*;
use ui::use_resource_screen;

#[component]
pub fn PaymentMethods() -> Element {
    let screen = use_resource_screen::<PaymentMethod>();
    let state = screen.state();

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Payment methods" }
            }

            section { class: "panel",
                if state.is_loading() {
                    p { class: "muted", "Loading..." }
                } else if state.records().is_empty() {
                    p { class: "muted", "No payment methods configured." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                            }
                        }
                        tbody {
                            for record in state.records().to_vec() {
                                tr { key: "{record.id}",
                                    td { class: "muted", "{record.id}" }
                                    td { "{record.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
