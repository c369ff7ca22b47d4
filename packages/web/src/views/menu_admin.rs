//! Menu administration.
//!
//! The rows managed here are the same collection the backend filters per
//! user at login, so edits made on this screen change what other users can
//! reach the next time they sign in. The current session's own menu is not
//! re-read; it stays as captured at login.

use api::MenuItem;
use dioxus::prelude::*;
use ui::{menu_icon, use_resource_screen, ConfirmDialog};

#[component]
pub fn MenuAdmin() -> Element {
    let mut screen = use_resource_screen::<MenuItem>();
    let state = screen.state();

    let rows = state.records().iter().map(|record| {
        let id = record.id;
        let edit_target = record.clone();
        rsx! {
            tr { key: "{id}",
                td { class: "icon-cell", {menu_icon(&record.icon, 14)} }
                td { "{record.menu_name}" }
                td { class: "muted mono", "{record.path}" }
                td { class: "row-actions",
                    button {
                        class: "btn btn-small",
                        onclick: move |_| screen.edit(&edit_target),
                        "Edit"
                    }
                    button {
                        class: "btn btn-small btn-danger",
                        onclick: move |_| screen.request_delete(id),
                        "Delete"
                    }
                }
            }
        }
    });

    let pending_name = screen.pending_delete().map(|id| {
        state
            .records()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.menu_name.clone())
            .unwrap_or_else(|| "this menu entry".to_string())
    });

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Menu" }
            }

            section { class: "panel",
                h3 { class: "panel-title",
                    if state.is_editing() { "Edit menu entry" } else { "Add menu entry" }
                }
                form {
                    class: "form-row",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        screen.submit();
                    },
                    label { class: "field",
                        span { "Name" }
                        input {
                            value: "{state.draft().menu_name}",
                            oninput: move |evt| screen.controller.write().draft_mut().menu_name = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Icon" }
                        input {
                            placeholder: "fa-chart-line",
                            value: "{state.draft().icon}",
                            oninput: move |evt| screen.controller.write().draft_mut().icon = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Path" }
                        input {
                            placeholder: "/dashboard",
                            value: "{state.draft().path}",
                            oninput: move |evt| screen.controller.write().draft_mut().path = evt.value(),
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: state.is_submitting(),
                            if state.is_editing() { "Update" } else { "Add" }
                        }
                        if state.is_editing() {
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| screen.cancel_edit(),
                                "Cancel"
                            }
                        }
                    }
                }
                if let Some(error) = state.form_error() {
                    p { class: "form-error", "{error.message}" }
                }
            }

            section { class: "panel",
                if state.is_loading() {
                    p { class: "muted", "Loading..." }
                } else if state.records().is_empty() {
                    p { class: "muted", "No menu entries yet." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Icon" }
                                th { "Name" }
                                th { "Path" }
                                th { "" }
                            }
                        }
                        tbody { {rows} }
                    }
                }
            }

            if let Some(name) = pending_name {
                ConfirmDialog {
                    title: "Delete menu entry",
                    message: format!("\"{name}\" disappears from every user's navigation."),
                    on_confirm: move |_| screen.confirm_delete(),
                    on_cancel: move |_| screen.decline_delete(),
                }
            }
        }
    }
}
