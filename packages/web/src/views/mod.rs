mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

mod menu_admin;
pub use menu_admin::MenuAdmin;

mod income_types;
pub use income_types::IncomeTypes;

mod categories;
pub use categories::Categories;

mod sub_categories;
pub use sub_categories::SubCategories;

mod payment_methods;
pub use payment_methods::PaymentMethods;

mod transactions;
pub use transactions::Transactions;

mod budgets;
pub use budgets::CategoryBudgets;

mod denied;
pub use denied::PermissionDenied;
