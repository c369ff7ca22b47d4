//! Modal dialogs.

use dioxus::prelude::*;

/// Dimmed backdrop with a centered panel. Clicking the backdrop closes;
/// clicks inside the panel do not bubble out to it.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Confirmation gate for destructive actions. Nothing happens unless
/// `on_confirm` fires; cancel and backdrop clicks both decline.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = String::from("Delete"))] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            h3 { class: "modal-title", "{title}" }
            p { class: "modal-message", "{message}" }
            div { class: "modal-actions",
                button {
                    class: "btn",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
