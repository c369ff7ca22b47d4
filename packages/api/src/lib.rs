//! # API crate — typed client for the finance backend
//!
//! Everything the console knows about the backend lives here: the transport
//! seam, the typed record catalogue, the CRUD state machine every screen
//! instantiates, and the session lifecycle. The UI crates hold no endpoint
//! paths or wire shapes of their own.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`HttpClient`] transport trait and the reqwest implementation |
//! | [`client`] | [`ApiClient`] — base URL joining, bearer attachment, envelope normalization, 401 handling |
//! | [`resources`] | [`Resource`]/[`Draft`] contract and the record types for every collection |
//! | [`controller`] | [`ResourceController`] — the generic list+form state machine |
//! | [`auth`] | login / logout / register flows over the same client |
//! | [`error`] | [`ApiError`] and [`InvalidDraft`] |

pub mod auth;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod resources;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use controller::{LoadPhase, ResourceController, SubmitAction};
pub use error::{ApiError, InvalidDraft};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method, ReqwestHttp};
pub use resources::{
    BudgetDraft, Category, CategoryBudget, CategoryDraft, CategoryTotal, Draft, ExpenseSummary,
    IncomeType, IncomeTypeDraft, MenuItem, MenuItemDraft, PaymentMethod, PayloadOf, ReadOnly,
    RecordId, Resource, SubCategory, SubCategoryDraft, Transaction, TransactionDraft,
    TransactionKind, UserRecord,
};
