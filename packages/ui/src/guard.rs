//! Route guard wrapping the protected shell.
//!
//! Every protected render passes through here, so the decision of what a
//! user may see lives in exactly one place: [`store::check_route`] over the
//! permissions captured at login. Not being signed in and lacking a menu
//! grant are different outcomes; the first clears to the login page, the
//! second lands on the denial page with the session intact.

use dioxus::prelude::*;
use store::{check_route, RouteCheck};

use crate::session::use_session;

/// Paths an authenticated user may always visit, menu or not.
const OPEN_PATHS: &[&str] = &["/permission-denied"];

#[component]
pub fn RouteGuard(path: String, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let authenticated = session.is_authenticated();
    if authenticated && OPEN_PATHS.contains(&path.as_str()) {
        return rsx! {
            {children}
        };
    }

    match check_route(authenticated, &session.permissions(), &path) {
        RouteCheck::Allowed => rsx! {
            {children}
        },
        RouteCheck::NotAuthenticated => {
            nav.replace("/login");
            rsx! {}
        }
        RouteCheck::NotPermitted => {
            tracing::debug!(%path, "navigation outside the granted menu");
            nav.replace("/permission-denied");
            rsx! {}
        }
    }
}
