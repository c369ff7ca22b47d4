//! # Toast notifications
//!
//! Transient feedback for saves, deletes and failures. The queue lives in a
//! context signal so any handler can push to it; [`ToastRack`] renders the
//! stack in a fixed corner and entries dismiss themselves after a few
//! seconds in the browser.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const DISMISS_MS: u32 = 4_000;
const MAX_ENTRIES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub time: String,
}

/// Toast queue held in context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Append an entry and return its id for later dismissal.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
            time: current_time(),
        });
        // Oldest entries fall off if dismissal never runs.
        while self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Access the queue provided by [`ToastProvider`].
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast and schedule its dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let id = toasts.write().push(level, message);
    auto_dismiss(*toasts, id);
}

#[cfg(target_arch = "wasm32")]
fn auto_dismiss(mut toasts: Signal<Toasts>, id: u64) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
        toasts.write().dismiss(id);
    });
}

// No timer off wasm; the close button still works.
#[cfg(not(target_arch = "wasm32"))]
fn auto_dismiss(_toasts: Signal<Toasts>, _id: u64) {}

/// Provides the queue and renders the rack above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastRack {}
    }
}

#[component]
fn ToastRack() -> Element {
    let toasts = use_toasts();
    let entries = toasts.read().entries().to_vec();

    rsx! {
        div { class: "toast-rack",
            for toast in entries {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    rsx! {
        div { class: toast.level.class(),
            span { class: "toast-message", "{toast.message}" }
            span { class: "toast-time", "{toast.time}" }
            button {
                class: "toast-close",
                onclick: move |_| toasts.write().dismiss(id),
                "\u{00d7}"
            }
        }
    }
}

fn current_time() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        format!(
            "{:02}:{:02}:{:02}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds()
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "00:00:00".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_distinct_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "saved");
        let b = toasts.push(ToastLevel::Error, "failed");
        assert_ne!(a, b);
        assert_eq!(toasts.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_that_entry() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "one");
        let b = toasts.push(ToastLevel::Info, "two");
        toasts.dismiss(a);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].id, b);
    }

    #[test]
    fn test_rack_is_capped() {
        let mut toasts = Toasts::default();
        for n in 0..20 {
            toasts.push(ToastLevel::Info, format!("toast {n}"));
        }
        assert_eq!(toasts.entries().len(), MAX_ENTRIES);
        // The survivors are the newest entries.
        assert_eq!(toasts.entries()[0].message, "toast 14");
    }
}
