//! Income type management.

use api::IncomeType;
use dioxus::prelude::*;
use ui::{menu_icon, use_resource_screen, ConfirmDialog};

#[component]
pub fn IncomeTypes() -> Element {
    let mut screen = use_resource_screen::<IncomeType>();
    let state = screen.state();

    let rows = state.records().iter().map(|record| {
        let id = record.id;
        let edit_target = record.clone();
        let icon = record.icon.clone().unwrap_or_default();
        rsx! {
            tr { key: "{id}",
                td { class: "icon-cell",
                    if !icon.is_empty() {
                        {menu_icon(&icon, 14)}
                    }
                }
                td { "{record.name}" }
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
            .map(|r| r.name.clone())
            .unwrap_or_else(|| "this income type".to_string())
    });

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Income types" }
            }

            section { class: "panel",
                h3 { class: "panel-title",
                    if state.is_editing() { "Edit income type" } else { "Add income type" }
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
                            value: "{state.draft().name}",
                            oninput: move |evt| screen.controller.write().draft_mut().name = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Icon (optional)" }
                        input {
                            placeholder: "fa-money-bill",
                            value: "{state.draft().icon}",
                            oninput: move |evt| screen.controller.write().draft_mut().icon = evt.value(),
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
                    p { class: "muted", "No income types yet." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Icon" }
                                th { "Name" }
                                th { "" }
                            }
                        }
                        tbody { {rows} }
                    }
                }
            }

            if let Some(name) = pending_name {
                ConfirmDialog {
                    title: "Delete income type",
                    message: format!("\"{name}\" will be removed permanently."),
                    on_confirm: move |_| screen.confirm_delete(),
                    on_cancel: move |_| screen.decline_delete(),
                }
            }
        }
    }
}
