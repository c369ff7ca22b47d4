//! # Resource controller — the state machine behind every CRUD screen
//!
//! One [`ResourceController`] drives each list+form screen. It never issues
//! network calls itself: `begin_*` methods run synchronously before a call
//! and `finish_*` methods apply its outcome, so a UI can keep the controller
//! in a signal and only borrow it briefly on either side of an await. That
//! split is also what makes every transition directly testable.
//!
//! ## Transitions
//!
//! | Event | Effect |
//! |-------|--------|
//! | [`begin_load`](ResourceController::begin_load) | `phase = Loading`. |
//! | [`finish_load`](ResourceController::finish_load) | Always settles `phase = Ready`. `Ok` replaces the list wholesale in server order; `Err` logs and leaves the list empty, so a failure renders as an empty state rather than a perpetual spinner. |
//! | [`begin_edit`](ResourceController::begin_edit) | Copies the record's editable fields into the draft and remembers the target id. Any draft in progress is discarded: the last edit intent wins. |
//! | [`cancel_edit`](ResourceController::cancel_edit) | Back to a blank create draft. |
//! | [`begin_submit`](ResourceController::begin_submit) | Validates the draft. `Ok` yields the [`SubmitAction`] to send and sets `submitting`; `Err` records the message and nothing may be sent. |
//! | [`finish_submit`](ResourceController::finish_submit) | Clears `submitting`. Success resets the form; the caller reloads so the list reflects server truth. Failure keeps the draft for retry. |
//! | [`finish_remove`](ResourceController::finish_remove) | Logs a failed delete. The list only changes via the caller's reload. |
//!
//! Deletion is confirm-gated in the UI; the controller only ever sees
//! confirmed removals.

use crate::error::{ApiError, InvalidDraft};
use crate::resources::{Draft, PayloadOf, RecordId, Resource};

/// Where the list currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// A load has settled, successfully or not.
    Ready,
}

/// What a validated submit should send.
#[derive(Debug)]
pub enum SubmitAction<R: Resource> {
    Create(PayloadOf<R>),
    Update(RecordId, PayloadOf<R>),
}

/// State machine for one resource collection.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceController<R: Resource> {
    records: Vec<R>,
    phase: LoadPhase,
    draft: R::Draft,
    editing: Option<RecordId>,
    submitting: bool,
    form_error: Option<InvalidDraft>,
}

impl<R: Resource> Default for ResourceController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceController<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            phase: LoadPhase::Idle,
            draft: R::Draft::default(),
            editing: None,
            submitting: false,
            form_error: None,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    /// Mutable access for form inputs.
    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The message shown next to the form after a refused submit.
    pub fn form_error(&self) -> Option<&InvalidDraft> {
        self.form_error.as_ref()
    }

    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Apply a finished load.
    pub fn finish_load(&mut self, outcome: Result<Vec<R>, ApiError>) {
        self.phase = LoadPhase::Ready;
        match outcome {
            Ok(records) => self.records = records,
            Err(error) => {
                tracing::warn!(resource = R::LABEL, %error, "load failed");
                self.records.clear();
            }
        }
    }

    /// Load a record's editable fields into the form.
    pub fn begin_edit(&mut self, record: &R) {
        self.editing = Some(record.id());
        self.draft = record.to_draft();
        self.form_error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = R::Draft::default();
        self.form_error = None;
    }

    /// Validate the draft and decide what to send. `None` means the draft
    /// was refused and no request may be issued.
    pub fn begin_submit(&mut self) -> Option<SubmitAction<R>> {
        match self.draft.validate() {
            Ok(payload) => {
                self.form_error = None;
                self.submitting = true;
                Some(match self.editing {
                    Some(id) => SubmitAction::Update(id, payload),
                    None => SubmitAction::Create(payload),
                })
            }
            Err(invalid) => {
                self.form_error = Some(invalid);
                None
            }
        }
    }

    /// Apply a finished create or update.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.draft = R::Draft::default();
                self.editing = None;
                self.form_error = None;
            }
            Err(error) => {
                tracing::warn!(resource = R::LABEL, %error, "submit failed");
            }
        }
    }

    /// Apply a finished delete.
    pub fn finish_remove(&mut self, outcome: Result<(), ApiError>) {
        if let Err(error) = outcome {
            tracing::warn!(resource = R::LABEL, %error, "delete failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::{Credential, MemoryStore, Session, SessionContext, UserProfile};

    use super::*;
    use crate::client::ApiClient;
    use crate::http::Method;
    use crate::resources::{Category, CategoryDraft, Transaction, TransactionKind};
    use crate::testing::StubHttp;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: RecordId(id),
            name: name.to_string(),
            icon: "fa-tag".to_string(),
        }
    }

    fn signed_in_client(stub: &StubHttp) -> ApiClient<StubHttp> {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        session.set_session(Session {
            credential: Credential {
                access: "tok".to_string(),
                refresh: None,
            },
            profile: UserProfile {
                username: "alice".to_string(),
                email: String::new(),
                role: None,
            },
            menu: vec![],
        });
        ApiClient::new("http://backend.test", session, stub.clone())
    }

    /// Drive the controller the way a screen does: validate, send, apply,
    /// reload.
    async fn submit_and_reload(
        controller: &mut ResourceController<Category>,
        client: &ApiClient<StubHttp>,
    ) {
        let Some(action) = controller.begin_submit() else {
            return;
        };
        let outcome = match &action {
            SubmitAction::Create(payload) => client.create::<Category>(payload).await,
            SubmitAction::Update(id, payload) => client.update::<Category>(*id, payload).await,
        };
        let succeeded = outcome.is_ok();
        controller.finish_submit(outcome);
        if succeeded {
            controller.begin_load();
            controller.finish_load(client.list().await);
        }
    }

    #[test]
    fn test_load_failure_settles_ready_with_empty_list() {
        let mut controller = ResourceController::<Category>::new();
        controller.begin_load();
        assert!(controller.is_loading());

        controller.finish_load(Err(ApiError::Network("down".to_string())));
        assert_eq!(controller.phase(), LoadPhase::Ready);
        assert!(controller.records().is_empty());
    }

    #[test]
    fn test_load_replaces_list_wholesale() {
        let mut controller = ResourceController::<Category>::new();
        controller.finish_load(Ok(vec![category(1, "Food"), category(2, "Travel")]));
        controller.finish_load(Ok(vec![category(2, "Travel")]));
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.records()[0].id, RecordId(2));
    }

    #[test]
    fn test_second_edit_replaces_first() {
        let mut controller = ResourceController::<Category>::new();
        controller.begin_edit(&category(1, "Food"));
        controller.draft_mut().name = "half-finished change".to_string();

        controller.begin_edit(&category(2, "Travel"));
        assert_eq!(controller.editing(), Some(RecordId(2)));
        assert_eq!(controller.draft().name, "Travel");
    }

    #[test]
    fn test_cancel_edit_resets_to_create() {
        let mut controller = ResourceController::<Category>::new();
        controller.begin_edit(&category(1, "Food"));
        controller.cancel_edit();
        assert!(!controller.is_editing());
        assert_eq!(controller.draft(), &CategoryDraft::default());
    }

    #[tokio::test]
    async fn test_invalid_draft_issues_no_network_call() {
        let stub = StubHttp::new();
        let client = signed_in_client(&stub);
        let mut controller = ResourceController::<Category>::new();

        controller.draft_mut().name = "Food".to_string();
        // icon left empty
        submit_and_reload(&mut controller, &client).await;

        assert!(stub.requests().is_empty());
        assert_eq!(controller.form_error().unwrap().field, Some("icon"));
        assert!(!controller.is_submitting());
        assert_eq!(controller.draft().name, "Food");
    }

    #[tokio::test]
    async fn test_create_then_reload_contains_record() {
        let stub = StubHttp::new();
        stub.reply(201, r#"{"id":3,"name":"Food","icon":"fa-utensils"}"#);
        stub.reply(200, r#"[{"id":3,"name":"Food","icon":"fa-utensils"}]"#);
        let client = signed_in_client(&stub);
        let mut controller = ResourceController::<Category>::new();

        controller.draft_mut().name = "Food".to_string();
        controller.draft_mut().icon = "fa-utensils".to_string();
        submit_and_reload(&mut controller, &client).await;

        let requests = stub.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[1].method, Method::Get);
        assert!(controller.records().iter().any(|c| c.id == RecordId(3)));
        // Form reset for the next create
        assert_eq!(controller.draft(), &CategoryDraft::default());
    }

    #[tokio::test]
    async fn test_edit_submit_issues_put_not_post() {
        let stub = StubHttp::new();
        stub.reply(200, r#"{"id":3,"name":"Groceries","icon":"fa-utensils"}"#);
        stub.reply(200, r#"[{"id":3,"name":"Groceries","icon":"fa-utensils"}]"#);
        let client = signed_in_client(&stub);
        let mut controller = ResourceController::<Category>::new();
        controller.finish_load(Ok(vec![category(3, "Food")]));

        let target = controller.records()[0].clone();
        controller.begin_edit(&target);
        controller.draft_mut().name = "Groceries".to_string();
        submit_and_reload(&mut controller, &client).await;

        let requests = stub.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://backend.test/api/categories/3/");
        assert_eq!(
            requests[0].body.as_ref().unwrap()["name"],
            serde_json::json!("Groceries")
        );

        // Same id, new name, and the screen is back in create mode
        assert_eq!(controller.records()[0].id, RecordId(3));
        assert_eq!(controller.records()[0].name, "Groceries");
        assert!(!controller.is_editing());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft_for_retry() {
        let stub = StubHttp::new();
        stub.reply(500, r#"{"detail":"boom"}"#);
        let client = signed_in_client(&stub);
        let mut controller = ResourceController::<Category>::new();

        controller.draft_mut().name = "Food".to_string();
        controller.draft_mut().icon = "fa-utensils".to_string();
        submit_and_reload(&mut controller, &client).await;

        assert_eq!(stub.requests().len(), 1);
        assert!(!controller.is_submitting());
        assert_eq!(controller.draft().name, "Food");
    }

    #[tokio::test]
    async fn test_delete_then_reload_drops_record() {
        let stub = StubHttp::new();
        stub.reply(204, "");
        stub.reply(200, r#"[{"id":2,"name":"Travel","icon":"fa-plane"}]"#);
        let client = signed_in_client(&stub);
        let mut controller = ResourceController::<Category>::new();
        controller.finish_load(Ok(vec![category(1, "Food"), category(2, "Travel")]));

        let outcome = client.delete::<Category>(RecordId(1)).await;
        let succeeded = outcome.is_ok();
        controller.finish_remove(outcome);
        if succeeded {
            controller.begin_load();
            controller.finish_load(client.list().await);
        }

        assert_eq!(stub.requests()[0].method, Method::Delete);
        assert_eq!(stub.requests()[0].url, "http://backend.test/api/categories/1/");
        assert!(!controller.records().iter().any(|c| c.id == RecordId(1)));
    }

    #[test]
    fn test_income_and_expense_submit_requirements() {
        let mut controller = ResourceController::<Transaction>::new();
        let draft = controller.draft_mut();
        draft.kind = Some(TransactionKind::Income);
        draft.amount = "100".to_string();
        draft.date = "2025-01-04".to_string();
        draft.payment_method = Some(RecordId(1));

        // Income without an income type is refused
        assert!(controller.begin_submit().is_none());
        assert_eq!(controller.form_error().unwrap().field, Some("income_type"));

        controller.draft_mut().income_type = Some(RecordId(7));
        let action = controller.begin_submit().unwrap();
        match action {
            SubmitAction::Create(payload) => {
                assert_eq!(payload.income_type, Some(RecordId(7)));
                assert_eq!(payload.category, None);
            }
            SubmitAction::Update(..) => panic!("fresh draft must create"),
        }
    }
}
