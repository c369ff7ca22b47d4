//! Dashboard: aggregate income, expense and balance figures.
//!
//! Everything shown here is computed by the backend and rendered verbatim;
//! the view never does its own arithmetic beyond scaling the bars.

use api::ExpenseSummary;
use dioxus::prelude::*;
use ui::{push_toast, use_backend, use_toasts, ToastLevel};

fn money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "0.00".to_string(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let backend = use_backend();
    let mut toasts = use_toasts();
    let mut summary = use_signal(|| Option::<ExpenseSummary>::None);
    let mut failed = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = backend.peek().clone();
        match client.fetch::<ExpenseSummary>(ExpenseSummary::PATH).await {
            Ok(data) => {
                failed.set(false);
                summary.set(Some(data));
            }
            Err(error) => {
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    format!("Summary not loaded: {error}"),
                );
                failed.set(true);
            }
        }
    });

    if failed() {
        return rsx! {
            div { class: "page",
                header { class: "page-head",
                    h2 { class: "page-title", "Dashboard" }
                }
                p { class: "muted", "The summary could not be loaded." }
            }
        };
    }

    let Some(summary) = summary() else {
        return rsx! {
            div { class: "page",
                header { class: "page-head",
                    h2 { class: "page-title", "Dashboard" }
                }
                p { class: "muted", "Loading..." }
            }
        };
    };

    let max = summary.max_total();
    let bar_rows = summary.graph_data.iter().map(|bar| {
        let pct = if max > 0.0 {
            (bar.total / max * 100.0).clamp(2.0, 100.0)
        } else {
            0.0
        };
        rsx! {
            div { class: "bar-row", key: "{bar.category}",
                span { class: "bar-name", "{bar.category}" }
                div { class: "bar-track",
                    div { class: "bar-fill", style: "width: {pct}%" }
                }
                span { class: "bar-amount", {format!("{:.2}", bar.total)} }
            }
        }
    });

    rsx! {
        div { class: "page",
            header { class: "page-head",
                h2 { class: "page-title", "Dashboard" }
            }

            div { class: "stat-grid",
                div { class: "stat-card stat-income",
                    span { class: "stat-label", "Total income" }
                    span { class: "stat-value", {money(summary.total_income)} }
                }
                div { class: "stat-card stat-expense",
                    span { class: "stat-label", "Total expense" }
                    span { class: "stat-value", {money(summary.total_expense)} }
                }
                div { class: "stat-card stat-balance",
                    span { class: "stat-label", "Balance" }
                    span { class: "stat-value", {money(summary.total_balance)} }
                }
            }

            section { class: "panel",
                h3 { class: "panel-title", "Spending by category" }
                if summary.graph_data.is_empty() {
                    p { class: "muted", "No expenses recorded yet." }
                } else {
                    div { class: "bar-chart", {bar_rows} }
                }
            }

            div { class: "chip-row",
                if let Some(top) = &summary.highest_category {
                    div { class: "chip chip-high",
                        span { "Highest: {top.category}" }
                        strong { {format!("{:.2}", top.total)} }
                    }
                }
                if let Some(low) = &summary.lowest_category {
                    div { class: "chip chip-low",
                        span { "Lowest: {low.category}" }
                        strong { {format!("{:.2}", low.total)} }
                    }
                }
            }
        }
    }
}
