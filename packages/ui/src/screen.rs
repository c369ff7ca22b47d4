//! # Screen wiring for collection views
//!
//! [`use_resource_screen`] binds one [`ResourceController`] to the backend
//! for the lifetime of a view: load on mount, validated submits, a
//! confirm-gated delete, and a reload after every successful mutation.
//! Views keep no list state of their own; they render the controller and
//! call the methods here from their handlers. Unmounting the view drops its
//! in-flight tasks along with it.

use api::{ApiError, RecordId, Resource, ResourceController, SubmitAction};
use dioxus::prelude::*;

use crate::backend::{use_backend, Backend};
use crate::toast::{push_toast, use_toasts, ToastLevel, Toasts};

pub struct ScreenHandle<R: Resource> {
    backend: Signal<Backend>,
    toasts: Signal<Toasts>,
    /// Form and list state. Views read it directly and edit the draft
    /// through `controller.write().draft_mut()`.
    pub controller: Signal<ResourceController<R>>,
    pending_delete: Signal<Option<RecordId>>,
}

// Derived impls would demand R: Copy; every field is already Copy.
impl<R: Resource> Clone for ScreenHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ScreenHandle<R> {}

impl<R: Resource> ScreenHandle<R> {
    /// Snapshot of the controller for rendering. Subscribes the caller.
    pub fn state(&self) -> ResourceController<R> {
        self.controller.read().clone()
    }

    /// Record staged for deletion while the confirmation dialog is open.
    pub fn pending_delete(&self) -> Option<RecordId> {
        *self.pending_delete.read()
    }

    pub fn reload(self) {
        spawn(self.run_load());
    }

    async fn run_load(mut self) {
        let client = self.backend.peek().clone();
        self.controller.write().begin_load();
        let outcome = client.list::<R>().await;
        self.controller.write().finish_load(outcome);
    }

    /// Load a record into the form for updating.
    pub fn edit(mut self, record: &R) {
        self.controller.write().begin_edit(record);
    }

    pub fn cancel_edit(mut self) {
        self.controller.write().cancel_edit();
    }

    /// Validate the draft and send it. A refused draft sets the form error
    /// and never touches the network.
    pub fn submit(mut self) {
        if self.controller.peek().is_submitting() {
            return;
        }
        let Some(action) = self.controller.write().begin_submit() else {
            return;
        };
        let client = self.backend.peek().clone();
        spawn(async move {
            let outcome = match &action {
                SubmitAction::Create(payload) => client.create::<R>(payload).await,
                SubmitAction::Update(id, payload) => client.update::<R>(*id, payload).await,
            };
            let verb = match &action {
                SubmitAction::Create(_) => "saved",
                SubmitAction::Update(..) => "updated",
            };
            self.report(&outcome, verb);
            let succeeded = outcome.is_ok();
            self.controller.write().finish_submit(outcome);
            if succeeded {
                self.run_load().await;
            }
        });
    }

    /// Stage a delete behind the confirmation dialog.
    pub fn request_delete(mut self, id: RecordId) {
        self.pending_delete.set(Some(id));
    }

    /// Close the dialog without deleting anything.
    pub fn decline_delete(mut self) {
        self.pending_delete.set(None);
    }

    /// Send the staged delete. No-op when nothing is staged.
    pub fn confirm_delete(mut self) {
        let Some(id) = self.pending_delete.write().take() else {
            return;
        };
        let client = self.backend.peek().clone();
        spawn(async move {
            let outcome = client.delete::<R>(id).await;
            self.report(&outcome, "deleted");
            let succeeded = outcome.is_ok();
            self.controller.write().finish_remove(outcome);
            if succeeded {
                self.run_load().await;
            }
        });
    }

    fn report(mut self, outcome: &Result<(), ApiError>, verb: &str) {
        match outcome {
            Ok(()) => push_toast(
                &mut self.toasts,
                ToastLevel::Success,
                format!("{} {verb}", capitalized(R::LABEL)),
            ),
            Err(error) => push_toast(
                &mut self.toasts,
                ToastLevel::Error,
                format!("{} not {verb}: {error}", capitalized(R::LABEL)),
            ),
        }
    }
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Set up the controller, client and initial load for one collection view.
pub fn use_resource_screen<R: Resource>() -> ScreenHandle<R> {
    let handle = ScreenHandle {
        backend: use_backend(),
        toasts: use_toasts(),
        controller: use_signal(ResourceController::new),
        pending_delete: use_signal(|| None),
    };

    use_future(move || handle.run_load());

    handle
}
