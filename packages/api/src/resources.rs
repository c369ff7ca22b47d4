//! # Resource contract and record types
//!
//! Every collection the console manages implements [`Resource`]: a wire
//! record the backend serves, plus a [`Draft`] — the user-editable
//! projection backing the create/update form. The generic controller and
//! client are written against these two traits; adding a collection means
//! adding types here and a view that instantiates the same machinery.
//!
//! ## Collections
//!
//! | Record | Endpoint | Editable |
//! |--------|----------|----------|
//! | [`Category`] | `/api/categories/` | yes |
//! | [`SubCategory`] | `/api/sub-categories/` | yes |
//! | [`IncomeType`] | `/api/income-type/` | yes |
//! | [`PaymentMethod`] | `/api/payment-method/` | list-only |
//! | [`Transaction`] | `/api/expense/` | yes |
//! | [`CategoryBudget`] | `/api/category-budget/` | yes |
//! | [`UserRecord`] | `/users/` | list-only |
//! | [`MenuItem`] | `/menu-list/` | yes |
//!
//! [`ExpenseSummary`] is not a collection; the dashboard fetches it as a
//! single document.
//!
//! ## Wire tolerances
//!
//! The backend serializes decimal fields either as JSON numbers or as
//! numeric strings depending on its serializer settings, so every monetary
//! and percent field goes through [`flexible_f64`]. Linked records arrive
//! denormalized in `*_data` fields; payloads send the raw id.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use store::MenuEntry;

use crate::error::InvalidDraft;

/// Server-assigned record identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A backend collection managed through the uniform CRUD screens.
pub trait Resource: DeserializeOwned + Clone + PartialEq + fmt::Debug + 'static {
    /// Collection path under the backend base URL, with trailing slash.
    const ENDPOINT: &'static str;
    /// Singular label used in diagnostics and activity messages.
    const LABEL: &'static str;
    /// Editable projection backing the create/update form.
    type Draft: Draft;

    fn id(&self) -> RecordId;

    /// Copy of the record's editable fields, loaded into the form when
    /// editing begins.
    fn to_draft(&self) -> Self::Draft;
}

/// Form state for creating or updating a [`Resource`].
pub trait Draft: Clone + Default + PartialEq + fmt::Debug + 'static {
    /// Body sent on create and update.
    type Payload: Serialize + fmt::Debug + 'static;

    /// Check required fields and coerce numerics. `Err` blocks submission
    /// before any network traffic.
    fn validate(&self) -> Result<Self::Payload, InvalidDraft>;
}

/// Payload type of a resource's draft.
pub type PayloadOf<R> = <<R as Resource>::Draft as Draft>::Payload;

/// Draft for list-only collections. Validation always refuses, so even a
/// stray submit cannot reach the network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadOnly;

impl Draft for ReadOnly {
    type Payload = ();

    fn validate(&self) -> Result<(), InvalidDraft> {
        Err(InvalidDraft::new("this collection is read-only"))
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, InvalidDraft> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidDraft::for_field(field, format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn required_id(field: &'static str, value: Option<RecordId>) -> Result<RecordId, InvalidDraft> {
    value.ok_or_else(|| InvalidDraft::for_field(field, format!("{field} is required")))
}

fn required_amount(field: &'static str, value: &str) -> Result<f64, InvalidDraft> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidDraft::for_field(field, format!("{field} is required")));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InvalidDraft::for_field(
            field,
            format!("{field} must be a number"),
        )),
    }
}

/// Accept a JSON number or a numeric string.
fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Categories

/// Expense category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub icon: String,
}

impl Draft for CategoryDraft {
    type Payload = CategoryPayload;

    fn validate(&self) -> Result<CategoryPayload, InvalidDraft> {
        Ok(CategoryPayload {
            name: required_text("name", &self.name)?,
            icon: required_text("icon", &self.icon)?,
        })
    }
}

impl Resource for Category {
    const ENDPOINT: &'static str = "/api/categories/";
    const LABEL: &'static str = "category";
    type Draft = CategoryDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-categories

/// Expense sub-category nested under a parent [`Category`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Parent category as denormalized by the backend.
    #[serde(default)]
    pub category_data: Option<Category>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubCategoryDraft {
    pub category: Option<RecordId>,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Serialize)]
pub struct SubCategoryPayload {
    pub category: RecordId,
    pub name: String,
    pub icon: String,
}

impl Draft for SubCategoryDraft {
    type Payload = SubCategoryPayload;

    fn validate(&self) -> Result<SubCategoryPayload, InvalidDraft> {
        Ok(SubCategoryPayload {
            category: required_id("category", self.category)?,
            name: required_text("name", &self.name)?,
            icon: required_text("icon", &self.icon)?,
        })
    }
}

impl Resource for SubCategory {
    const ENDPOINT: &'static str = "/api/sub-categories/";
    const LABEL: &'static str = "sub-category";
    type Draft = SubCategoryDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> SubCategoryDraft {
        SubCategoryDraft {
            category: self.category_data.as_ref().map(|c| c.id),
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Income types

/// Source of income, e.g. salary or interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomeType {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomeTypeDraft {
    pub name: String,
    /// Optional; the backend accepts an empty icon here.
    pub icon: String,
}

#[derive(Debug, Serialize)]
pub struct IncomeTypePayload {
    pub name: String,
    pub icon: String,
}

impl Draft for IncomeTypeDraft {
    type Payload = IncomeTypePayload;

    fn validate(&self) -> Result<IncomeTypePayload, InvalidDraft> {
        Ok(IncomeTypePayload {
            name: required_text("name", &self.name)?,
            icon: self.icon.trim().to_string(),
        })
    }
}

impl Resource for IncomeType {
    const ENDPOINT: &'static str = "/api/income-type/";
    const LABEL: &'static str = "income type";
    type Draft = IncomeTypeDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> IncomeTypeDraft {
        IncomeTypeDraft {
            name: self.name.clone(),
            icon: self.icon.clone().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Payment methods

/// How a transaction was settled. Managed elsewhere; listed read-only here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: RecordId,
    pub name: String,
}

impl Resource for PaymentMethod {
    const ENDPOINT: &'static str = "/api/payment-method/";
    const LABEL: &'static str = "payment method";
    type Draft = ReadOnly;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> ReadOnly {
        ReadOnly
    }
}

// ---------------------------------------------------------------------------
// Transactions

/// Whether a transaction adds to or draws from the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

/// One income or expense movement.
///
/// Exactly one of `income_type_data` / `category_data` is populated,
/// matching `transaction_type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub transaction_type: TransactionKind,
    #[serde(deserialize_with = "flexible_f64")]
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub income_type_data: Option<IncomeType>,
    #[serde(default)]
    pub category_data: Option<Category>,
    #[serde(default)]
    pub payment_method_data: Option<PaymentMethod>,
}

/// Form state for a transaction. `amount` stays text until validation so a
/// half-typed value never panics or rounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionDraft {
    pub kind: Option<TransactionKind>,
    pub income_type: Option<RecordId>,
    pub category: Option<RecordId>,
    pub amount: String,
    pub date: String,
    pub payment_method: Option<RecordId>,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionPayload {
    pub transaction_type: TransactionKind,
    pub income_type: Option<RecordId>,
    pub category: Option<RecordId>,
    pub amount: f64,
    pub date: String,
    pub payment_method: RecordId,
    pub description: String,
}

impl Draft for TransactionDraft {
    type Payload = TransactionPayload;

    fn validate(&self) -> Result<TransactionPayload, InvalidDraft> {
        let kind = self.kind.ok_or_else(|| {
            InvalidDraft::for_field("transaction_type", "select income or expense")
        })?;

        // The link requirement flips with the kind; the unused side is
        // dropped from the payload even if the form still holds a value.
        let (income_type, category) = match kind {
            TransactionKind::Income => (Some(required_id("income_type", self.income_type)?), None),
            TransactionKind::Expense => (None, Some(required_id("category", self.category)?)),
        };

        Ok(TransactionPayload {
            transaction_type: kind,
            income_type,
            category,
            amount: required_amount("amount", &self.amount)?,
            date: required_text("date", &self.date)?,
            payment_method: required_id("payment_method", self.payment_method)?,
            description: self.description.trim().to_string(),
        })
    }
}

impl Resource for Transaction {
    const ENDPOINT: &'static str = "/api/expense/";
    const LABEL: &'static str = "transaction";
    type Draft = TransactionDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: Some(self.transaction_type),
            income_type: self.income_type_data.as_ref().map(|t| t.id),
            category: self.category_data.as_ref().map(|c| c.id),
            amount: self.amount.to_string(),
            date: self.date.clone(),
            payment_method: self.payment_method_data.as_ref().map(|p| p.id),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Category budgets

/// Monthly spending cap for one category, decorated by the backend with
/// usage figures. The percent and over-budget fields are rendered verbatim,
/// never recomputed client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub id: RecordId,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(deserialize_with = "flexible_f64")]
    pub budget: f64,
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub spent: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub remaining: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub percent_used: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub percent_remains: Option<f64>,
    #[serde(default)]
    pub over_budget: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetDraft {
    pub category: Option<RecordId>,
    pub monthly_limit: String,
}

#[derive(Debug, Serialize)]
pub struct BudgetPayload {
    pub category: RecordId,
    pub monthly_limit: f64,
}

impl Draft for BudgetDraft {
    type Payload = BudgetPayload;

    fn validate(&self) -> Result<BudgetPayload, InvalidDraft> {
        Ok(BudgetPayload {
            category: required_id("category", self.category)?,
            monthly_limit: required_amount("monthly_limit", &self.monthly_limit)?,
        })
    }
}

impl Resource for CategoryBudget {
    const ENDPOINT: &'static str = "/api/category-budget/";
    const LABEL: &'static str = "category budget";
    type Draft = BudgetDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> BudgetDraft {
        BudgetDraft {
            category: self.category.as_ref().map(|c| c.id),
            monthly_limit: self.budget.to_string(),
        }
    }
}

/// [`flexible_f64`] lifted over an optional field.
fn flexible_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "flexible_f64")] f64);

    Option::<Wrapper>::deserialize(deserializer).map(|opt| opt.map(|w| w.0))
}

// ---------------------------------------------------------------------------
// Users

/// Registered account, listed read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl Resource for UserRecord {
    const ENDPOINT: &'static str = "/users/";
    const LABEL: &'static str = "user";
    type Draft = ReadOnly;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> ReadOnly {
        ReadOnly
    }
}

// ---------------------------------------------------------------------------
// Menu administration

/// Navigation menu row. The same collection, filtered per user by the
/// backend, is what scopes every user's navigation at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: RecordId,
    pub menu_name: String,
    #[serde(default)]
    pub icon: String,
    pub path: String,
}

impl MenuItem {
    pub fn into_menu_entry(self) -> MenuEntry {
        MenuEntry {
            label: self.menu_name,
            icon: self.icon,
            path: self.path,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuItemDraft {
    pub menu_name: String,
    pub icon: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct MenuItemPayload {
    pub menu_name: String,
    pub icon: String,
    pub path: String,
}

impl Draft for MenuItemDraft {
    type Payload = MenuItemPayload;

    fn validate(&self) -> Result<MenuItemPayload, InvalidDraft> {
        Ok(MenuItemPayload {
            menu_name: required_text("menu_name", &self.menu_name)?,
            icon: required_text("icon", &self.icon)?,
            path: required_text("path", &self.path)?,
        })
    }
}

impl Resource for MenuItem {
    const ENDPOINT: &'static str = "/menu-list/";
    const LABEL: &'static str = "menu entry";
    type Draft = MenuItemDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            menu_name: self.menu_name.clone(),
            icon: self.icon.clone(),
            path: self.path.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard aggregate

/// One bar of the category breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub total: f64,
}

/// Aggregate figures the dashboard renders. Read-only; fetched as a single
/// document from `/api/expense-summary/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub total_income: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub total_expense: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64_opt")]
    pub total_balance: Option<f64>,
    #[serde(default)]
    pub graph_data: Vec<CategoryTotal>,
    #[serde(default)]
    pub highest_category: Option<CategoryTotal>,
    #[serde(default)]
    pub lowest_category: Option<CategoryTotal>,
}

impl ExpenseSummary {
    /// Path the dashboard fetches.
    pub const PATH: &'static str = "/api/expense-summary/";

    /// Largest bar in the breakdown, used to scale the others.
    pub fn max_total(&self) -> f64 {
        self.graph_data.iter().fold(0.0, |max, bar| bar.total.max(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_draft_requires_name_and_icon() {
        let draft = CategoryDraft::default();
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Some("name"));

        let draft = CategoryDraft {
            name: "Food".to_string(),
            icon: "  ".to_string(),
        };
        assert_eq!(draft.validate().unwrap_err().field, Some("icon"));

        let draft = CategoryDraft {
            name: " Food ".to_string(),
            icon: "fa-utensils".to_string(),
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.name, "Food");
    }

    #[test]
    fn test_income_type_icon_optional() {
        let draft = IncomeTypeDraft {
            name: "Salary".to_string(),
            icon: String::new(),
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.icon, "");
    }

    #[test]
    fn test_income_transaction_requires_income_type() {
        let draft = TransactionDraft {
            kind: Some(TransactionKind::Income),
            category: Some(RecordId(3)),
            amount: "100".to_string(),
            date: "2025-01-04".to_string(),
            payment_method: Some(RecordId(1)),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, Some("income_type"));

        // Once the income type is set, the stale category is dropped from
        // the payload rather than sent along.
        let draft = TransactionDraft {
            income_type: Some(RecordId(7)),
            ..draft
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.income_type, Some(RecordId(7)));
        assert_eq!(payload.category, None);
    }

    #[test]
    fn test_expense_transaction_requires_category() {
        let draft = TransactionDraft {
            kind: Some(TransactionKind::Expense),
            income_type: Some(RecordId(7)),
            amount: "42.50".to_string(),
            date: "2025-01-04".to_string(),
            payment_method: Some(RecordId(1)),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, Some("category"));

        let draft = TransactionDraft {
            category: Some(RecordId(3)),
            ..draft
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.category, Some(RecordId(3)));
        assert_eq!(payload.income_type, None);
    }

    #[test]
    fn test_transaction_rejects_unparsable_amount() {
        let draft = TransactionDraft {
            kind: Some(TransactionKind::Expense),
            category: Some(RecordId(3)),
            amount: "12,50".to_string(),
            date: "2025-01-04".to_string(),
            payment_method: Some(RecordId(1)),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, Some("amount"));

        let draft = TransactionDraft {
            kind: Some(TransactionKind::Expense),
            category: Some(RecordId(3)),
            amount: String::new(),
            date: "2025-01-04".to_string(),
            payment_method: Some(RecordId(1)),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, Some("amount"));
    }

    #[test]
    fn test_kind_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"Income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"Expense\""
        );
    }

    #[test]
    fn test_transaction_decodes_string_amount() {
        let raw = r#"{
            "id": 9,
            "transaction_type": "Expense",
            "amount": "450.00",
            "date": "2025-01-04",
            "description": null,
            "category_data": { "id": 3, "name": "Food", "icon": "fa-utensils" },
            "payment_method_data": { "id": 1, "name": "Cash" }
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.amount, 450.0);
        assert_eq!(tx.transaction_type, TransactionKind::Expense);
        assert!(tx.income_type_data.is_none());

        let draft = tx.to_draft();
        assert_eq!(draft.kind, Some(TransactionKind::Expense));
        assert_eq!(draft.category, Some(RecordId(3)));
        assert_eq!(draft.payment_method, Some(RecordId(1)));
        assert_eq!(draft.amount, "450");
    }

    #[test]
    fn test_budget_decodes_decorations() {
        let raw = r#"{
            "id": 2,
            "category": { "id": 3, "name": "Food", "icon": "fa-utensils" },
            "budget": "1000.00",
            "spent": 250,
            "remaining": "750.00",
            "percent_used": 25.0,
            "percent_remains": "75.0",
            "over_budget": false
        }"#;
        let budget: CategoryBudget = serde_json::from_str(raw).unwrap();
        assert_eq!(budget.budget, 1000.0);
        assert_eq!(budget.spent, Some(250.0));
        assert_eq!(budget.percent_remains, Some(75.0));
        assert!(!budget.over_budget);

        let draft = budget.to_draft();
        assert_eq!(draft.category, Some(RecordId(3)));
        assert_eq!(draft.monthly_limit, "1000");
    }

    #[test]
    fn test_budget_draft_requires_numeric_limit() {
        let draft = BudgetDraft {
            category: Some(RecordId(3)),
            monthly_limit: "lots".to_string(),
        };
        assert_eq!(draft.validate().unwrap_err().field, Some("monthly_limit"));
    }

    #[test]
    fn test_read_only_draft_refuses() {
        assert!(ReadOnly.validate().is_err());
    }

    #[test]
    fn test_menu_item_converts_to_menu_entry() {
        let item = MenuItem {
            id: RecordId(1),
            menu_name: "Dashboard".to_string(),
            icon: "fa-chart-line".to_string(),
            path: "/dashboard".to_string(),
        };
        let entry = item.into_menu_entry();
        assert_eq!(entry.label, "Dashboard");
        assert_eq!(entry.path, "/dashboard");
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let summary: ExpenseSummary = serde_json::from_str("{}").unwrap();
        assert!(summary.graph_data.is_empty());
        assert!(summary.highest_category.is_none());

        let raw = r#"{
            "total_income": "1200.00",
            "total_expense": 800,
            "total_balance": 400,
            "graph_data": [
                { "category": "Food", "total": "450.00" },
                { "category": "Travel", "total": 350 }
            ],
            "highest_category": { "category": "Food", "total": 450 },
            "lowest_category": { "category": "Travel", "total": 350 }
        }"#;
        let summary: ExpenseSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.total_income, Some(1200.0));
        assert_eq!(summary.graph_data.len(), 2);
        assert_eq!(summary.max_total(), 450.0);
    }
}
