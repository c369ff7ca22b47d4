use dioxus::prelude::*;

use ui::{
    use_session, BackendProvider, Navbar, RouteGuard, SessionProvider, Sidebar, ToastProvider,
};
use views::{
    Categories, CategoryBudgets, Dashboard, IncomeTypes, Login, MenuAdmin, PaymentMethods,
    PermissionDenied, Register, SubCategories, Transactions, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AdminShell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/menu_list")]
        MenuAdmin {},
        #[route("/income_type")]
        IncomeTypes {},
        #[route("/expense_category")]
        Categories {},
        #[route("/expense_sub_category")]
        SubCategories {},
        #[route("/payment_method")]
        PaymentMethods {},
        #[route("/transaction")]
        Transactions {},
        #[route("/category_budget")]
        CategoryBudgets {},
        #[route("/permission-denied")]
        PermissionDenied {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        SessionProvider {
            BackendProvider { base_url: store::TallyConfig::default().backend.base_url,
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Send `/` wherever the stored session says it belongs.
#[component]
fn Root() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if session.is_authenticated() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}

/// Chrome around every protected route. The guard wraps the whole shell, so
/// a refused check renders nothing protected, chrome included.
#[component]
fn AdminShell() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();

    rsx! {
        RouteGuard { path: path.clone(),
            div { class: "shell",
                Sidebar { active_path: path }
                div { class: "shell-main",
                    Navbar {}
                    main { class: "shell-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
