//! Transaction management.
//!
//! The form flips between income and expense: an income links an income
//! type, an expense links a category, and whichever side is unused is
//! dropped at validation rather than sent stale.

use api::{Category, IncomeType, PaymentMethod, RecordId, Transaction, TransactionKind};
use dioxus::prelude::*;
use ui::{push_toast, use_backend, use_resource_screen, use_toasts, ConfirmDialog, ToastLevel};

fn today_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
pub fn Transactions() -> Element {
    let mut screen = use_resource_screen::<Transaction>();
    let backend = use_backend();
    let mut toasts = use_toasts();
    let state = screen.state();

    // Link choices for the form, loaded once alongside the list.
    let mut income_types = use_signal(Vec::<IncomeType>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut methods = use_signal(Vec::<PaymentMethod>::new);
    let _refs = use_resource(move || async move {
        let client = backend.peek().clone();
        match client.list::<IncomeType>().await {
            Ok(list) => income_types.set(list),
            Err(error) => push_toast(
                &mut toasts,
                ToastLevel::Error,
                format!("Income types not loaded: {error}"),
            ),
        }
        match client.list::<Category>().await {
            Ok(list) => categories.set(list),
            Err(error) => push_toast(
                &mut toasts,
                ToastLevel::Error,
                format!("Categories not loaded: {error}"),
            ),
        }
        match client.list::<PaymentMethod>().await {
            Ok(list) => methods.set(list),
            Err(error) => push_toast(
                &mut toasts,
                ToastLevel::Error,
                format!("Payment methods not loaded: {error}"),
            ),
        }
    });

    // Start the date field on today rather than blank.
    use_effect(move || {
        if screen.controller.peek().draft().date.is_empty() {
            screen.controller.write().draft_mut().date = today_iso();
        }
    });

    let rows = state.records().iter().map(|record| {
        let id = record.id;
        let edit_target = record.clone();
        let linked = match record.transaction_type {
            TransactionKind::Income => record
                .income_type_data
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            TransactionKind::Expense => record
                .category_data
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        };
        let method = record
            .payment_method_data
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_default();
        let description = record.description.clone().unwrap_or_default();
        let kind_class = match record.transaction_type {
            TransactionKind::Income => "kind kind-income",
            TransactionKind::Expense => "kind kind-expense",
        };
        rsx! {
            tr { key: "{id}",
                td { class: "muted", "{record.date}" }
                td {
                    span { class: kind_class, {record.transaction_type.label()} }
                }
                td { class: "amount-cell", {format!("{:.2}", record.amount)} }
                td { "{linked}" }
                td { class: "muted", "{method}" }
                td { class: "muted", "{description}" }
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

    let kinds = income_types();
    let cats = categories();
    let pays = methods();

    let draft = state.draft();
    let selected_kind = draft.kind.map(|k| k.label()).unwrap_or("");
    let selected_income = draft.income_type.map(|id| id.to_string()).unwrap_or_default();
    let selected_category = draft.category.map(|id| id.to_string()).unwrap_or_default();
    let selected_method = draft
        .payment_method
        .map(|id| id.to_string())
        .unwrap_or_default();

    let link_field = match draft.kind {
        Some(TransactionKind::Income) => rsx! {
            label { class: "field",
                span { "Income type" }
                select {
                    value: "{selected_income}",
                    onchange: move |evt| {
                        screen.controller.write().draft_mut().income_type =
                            evt.value().parse::<i64>().ok().map(RecordId);
                    },
                    option { value: "", "Select an income type" }
                    for kind in kinds.iter() {
                        option { key: "{kind.id}", value: "{kind.id}", "{kind.name}" }
                    }
                }
            }
        },
        Some(TransactionKind::Expense) => rsx! {
            label { class: "field",
                span { "Category" }
                select {
                    value: "{selected_category}",
                    onchange: move |evt| {
                        screen.controller.write().draft_mut().category =
                            evt.value().parse::<i64>().ok().map(RecordId);
                    },
                    option { value: "", "Select a category" }
                    for cat in cats.iter() {
                        option { key: "{cat.id}", value: "{cat.id}", "{cat.name}" }
                    }
                }
            }
        },
        None => rsx! {
            p { class: "muted field-hint", "Pick a type to choose its source." }
        },
    };

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Transactions" }
            }

            section { class: "panel",
                h3 { class: "panel-title",
                    if state.is_editing() { "Edit transaction" } else { "Add transaction" }
                }
                form {
                    class: "form-grid",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        screen.submit();
                    },
                    label { class: "field",
                        span { "Type" }
                        select {
                            value: "{selected_kind}",
                            onchange: move |evt| {
                                screen.controller.write().draft_mut().kind = match evt.value().as_str() {
                                    "Income" => Some(TransactionKind::Income),
                                    "Expense" => Some(TransactionKind::Expense),
                                    _ => None,
                                };
                            },
                            option { value: "", "Select a type" }
                            option { value: "Income", "Income" }
                            option { value: "Expense", "Expense" }
                        }
                    }

                    {link_field}

                    label { class: "field",
                        span { "Amount" }
                        input {
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            value: "{draft.amount}",
                            oninput: move |evt| screen.controller.write().draft_mut().amount = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Date" }
                        input {
                            r#type: "date",
                            value: "{draft.date}",
                            oninput: move |evt| screen.controller.write().draft_mut().date = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Payment method" }
                        select {
                            value: "{selected_method}",
                            onchange: move |evt| {
                                screen.controller.write().draft_mut().payment_method =
                                    evt.value().parse::<i64>().ok().map(RecordId);
                            },
                            option { value: "", "Select a payment method" }
                            for pay in pays.iter() {
                                option { key: "{pay.id}", value: "{pay.id}", "{pay.name}" }
                            }
                        }
                    }
                    label { class: "field field-wide",
                        span { "Description (optional)" }
                        input {
                            value: "{draft.description}",
                            oninput: move |evt| screen.controller.write().draft_mut().description = evt.value(),
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
                    p { class: "muted", "No transactions yet." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Type" }
                                th { "Amount" }
                                th { "Source" }
                                th { "Method" }
                                th { "Description" }
                                th { "" }
                            }
                        }
                        tbody { {rows} }
                    }
                }
            }

            if screen.pending_delete().is_some() {
                ConfirmDialog {
                    title: "Delete transaction",
                    message: "The transaction will be removed permanently.",
                    on_confirm: move |_| screen.confirm_delete(),
                    on_cancel: move |_| screen.decline_delete(),
                }
            }
        }
    }
}
