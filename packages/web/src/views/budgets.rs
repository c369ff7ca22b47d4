//! Monthly budgets per expense category.
//!
//! Spending figures on each card come straight from the backend; the
//! client only formats them and never recomputes usage.

use api::{Category, CategoryBudget, RecordId};
use dioxus::prelude::*;
use ui::{push_toast, use_backend, use_resource_screen, use_toasts, ConfirmDialog, ToastLevel};

fn money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "0.00".to_string(),
    }
}

#[component]
pub fn CategoryBudgets() -> Element {
    let mut screen = use_resource_screen::<CategoryBudget>();
    let backend = use_backend();
    let mut toasts = use_toasts();
    let state = screen.state();

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

    let cards = state.records().iter().map(|record| {
        let id = record.id;
        let edit_target = record.clone();
        let name = record
            .category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Uncategorized".to_string());
        let used = record.percent_used.unwrap_or(0.0).clamp(0.0, 100.0);
        let fill_class = if record.over_budget {
            "budget-fill budget-fill-over"
        } else {
            "budget-fill"
        };
        rsx! {
            article { key: "{id}", class: "budget-card",
                header { class: "budget-head",
                    h4 { class: "budget-name", "{name}" }
                    if record.over_budget {
                        span { class: "budget-badge", "Over budget" }
                    }
                }
                div { class: "budget-track",
                    div { class: fill_class, style: "width: {used}%" }
                }
                dl { class: "budget-figures",
                    div {
                        dt { "Limit" }
                        dd { {format!("{:.2}", record.budget)} }
                    }
                    div {
                        dt { "Spent" }
                        dd { {money(record.spent)} }
                    }
                    div {
                        dt { "Remaining" }
                        dd { {money(record.remaining)} }
                    }
                }
                footer { class: "row-actions",
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
            .find(|record| record.id == id)
            .and_then(|record| record.category.as_ref().map(|c| c.name.clone()))
            .unwrap_or_else(|| "Uncategorized".to_string())
    });

    let options = categories();
    let draft = state.draft();
    let selected_category = draft.category.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Category budgets" }
            }

            section { class: "panel",
                h3 { class: "panel-title",
                    if state.is_editing() { "Edit budget" } else { "Add budget" }
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
                            value: "{selected_category}",
                            onchange: move |evt| {
                                screen.controller.write().draft_mut().category =
                                    evt.value().parse::<i64>().ok().map(RecordId);
                            },
                            option { value: "", "Select a category" }
                            for cat in options.iter() {
                                option { key: "{cat.id}", value: "{cat.id}", "{cat.name}" }
                            }
                        }
                    }
                    label { class: "field",
                        span { "Monthly limit" }
                        input {
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            value: "{draft.monthly_limit}",
                            oninput: move |evt| {
                                screen.controller.write().draft_mut().monthly_limit = evt.value();
                            },
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

            if state.is_loading() {
                p { class: "muted", "Loading..." }
            } else if state.records().is_empty() {
                p { class: "muted", "No budgets yet." }
            } else {
                div { class: "budget-grid", {cards} }
            }

            if let Some(name) = pending_name {
                ConfirmDialog {
                    title: "Delete budget",
                    message: format!("The budget for \"{name}\" will be removed."),
                    on_confirm: move |_| screen.confirm_delete(),
                    on_cancel: move |_| screen.decline_delete(),
                }
            }
        }
    }
}
