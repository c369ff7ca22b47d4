//! Expense sub-category management. Each row hangs off a parent category.

use api::{Category, RecordId, SubCategory};
use dioxus::prelude::*;
use ui::{
    menu_icon, push_toast, use_backend, use_resource_screen, use_toasts, ConfirmDialog, ToastLevel,
};

#[component]
pub fn SubCategories() -> Element {
    let mut screen = use_resource_screen::<SubCategory>();
    let backend = use_backend();
    let mut toasts = use_toasts();
    let state = screen.state();

    // Parent choices for the select, loaded once alongside the list.
    let mut categories = use_signal(Vec::<Category>::new);
    let _refs = use_resource(move || async move {
        let client = backend.peek().clone();
        match client.list::<Category>().await {
            Ok(list) => categories.set(list),
            Err(error) => push_toast(
                &mut toasts,
                ToastLevel::Error,
                format!("Categories not loaded: {error}"),
            ),
        }
    });

    let rows = state.records().iter().map(|record| {
        let id = record.id;
        let edit_target = record.clone();
        let parent = record
            .category_data
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        rsx! {
            tr { key: "{id}",
                td { class: "icon-cell", {menu_icon(&record.icon, 14)} }
                td { "{record.name}" }
                td { class: "muted", "{parent}" }
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
            .unwrap_or_else(|| "this sub-category".to_string())
    });

    let parents = categories();
    let selected_parent = state
        .draft()
        .category
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Expense sub-categories" }
            }

            section { class: "panel",
                h3 { class: "panel-title",
                    if state.is_editing() { "Edit sub-category" } else { "Add sub-category" }
                }
                form {
                    class: "form-row",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        screen.submit();
                    },
                    label { class: "field",
                        span { "Category" }
                        select {
                            value: "{selected_parent}",
                            onchange: move |evt| {
                                screen.controller.write().draft_mut().category =
                                    evt.value().parse::<i64>().ok().map(RecordId);
                            },
                            option { value: "", "Select a category" }
                            for parent in parents.iter() {
                                option { key: "{parent.id}", value: "{parent.id}", "{parent.name}" }
                            }
                        }
                    }
                    label { class: "field",
                        span { "Name" }
                        input {
                            value: "{state.draft().name}",
                            oninput: move |evt| screen.controller.write().draft_mut().name = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Icon" }
                        input {
                            placeholder: "fa-cart-shopping",
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
                    p { class: "muted", "No sub-categories yet." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Icon" }
                                th { "Name" }
                                th { "Category" }
                                th { "" }
                            }
                        }
                        tbody { {rows} }
                    }
                }
            }

            if let Some(name) = pending_name {
                ConfirmDialog {
                    title: "Delete sub-category",
                    message: format!("\"{name}\" will be removed permanently."),
                    on_confirm: move |_| screen.confirm_delete(),
                    on_cancel: move |_| screen.decline_delete(),
                }
            }
        }
    }
}
