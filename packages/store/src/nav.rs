//! # Permission and navigation model
//!
//! The backend issues each user a menu: an ordered list of entries naming the
//! screens that user may open. On the client that menu is the entire
//! authorization surface. [`PermissionSet`] snapshots it into a reachability
//! test computed once per login, and [`RouteCheck`] is the decision the route
//! guard acts on before a screen mounts.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`PermissionSet::from_menu`] | Build the ordered pattern list from menu entries. |
//! | [`PermissionSet::is_reachable`] | Exact or `:param` segment match against a concrete path. |
//! | [`PermissionSet::reachable_paths`] | Patterns in issued order, for rendering the sidebar. |
//! | [`check_route`] | Combine credential presence and permissions into a [`RouteCheck`]. |
//!
//! An empty menu makes nothing reachable, so a user whose menu failed to load
//! sees no navigation rather than navigation that errors on use. Paths not
//! named by any entry are never reachable.

use serde::{Deserialize, Serialize};

use crate::models::MenuEntry;

/// Reachability snapshot computed from the session menu.
///
/// Patterns come verbatim from menu `path` fields. A `:name` segment matches
/// exactly one concrete segment, so `/users/:id` admits `/users/42` but not
/// `/users` or `/users/42/edit`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionSet {
    patterns: Vec<String>,
}

impl PermissionSet {
    pub fn from_menu(menu: &[MenuEntry]) -> Self {
        Self {
            patterns: menu.iter().map(|entry| entry.path.clone()).collect(),
        }
    }

    /// True when `path` matches any menu pattern.
    pub fn is_reachable(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, path))
    }

    /// Menu paths in their issued order.
    pub fn reachable_paths(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Segment-wise match; a `:param` segment matches any one concrete segment.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segs = pattern.trim_matches('/').split('/');
    let mut path_segs = path.trim_matches('/').split('/');
    loop {
        match (pattern_segs.next(), path_segs.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if !expected.starts_with(':') && expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Outcome of guarding a navigation attempt.
///
/// The two denials are distinct on purpose: a visitor with no credential is
/// sent to login, while a signed-in user missing a menu entry sees the
/// permission-denied screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteCheck {
    /// Credential present and the path is on the menu.
    Allowed,
    /// No credential stored.
    NotAuthenticated,
    /// Signed in, but the path is off the menu.
    NotPermitted,
}

/// Decide whether the current session may open `path`.
pub fn check_route(authenticated: bool, permissions: &PermissionSet, path: &str) -> RouteCheck {
    if !authenticated {
        RouteCheck::NotAuthenticated
    } else if permissions.is_reachable(path) {
        RouteCheck::Allowed
    } else {
        RouteCheck::NotPermitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(paths: &[&str]) -> Vec<MenuEntry> {
        paths
            .iter()
            .map(|p| MenuEntry::new(p.trim_start_matches('/'), "", *p))
            .collect()
    }

    #[test]
    fn test_empty_menu_denies_everything() {
        let perms = PermissionSet::from_menu(&[]);
        assert!(!perms.is_reachable("/dashboard"));
        assert!(!perms.is_reachable("/"));
        assert!(perms.is_empty());
    }

    #[test]
    fn test_exact_match_only_named_paths() {
        let perms = PermissionSet::from_menu(&menu(&["/dashboard"]));
        assert!(perms.is_reachable("/dashboard"));
        assert!(!perms.is_reachable("/users"));
        assert!(!perms.is_reachable("/dashboard/extra"));
    }

    #[test]
    fn test_param_segment_matches_one_segment() {
        let perms = PermissionSet::from_menu(&menu(&["/users/:id"]));
        assert!(perms.is_reachable("/users/42"));
        assert!(!perms.is_reachable("/users"));
        assert!(!perms.is_reachable("/users/42/edit"));
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let perms = PermissionSet::from_menu(&menu(&["/transaction"]));
        assert!(perms.is_reachable("/transaction/"));
    }

    #[test]
    fn test_order_preserved() {
        let perms = PermissionSet::from_menu(&menu(&["/b", "/a", "/c"]));
        let paths: Vec<_> = perms.reachable_paths().collect();
        assert_eq!(paths, vec!["/b", "/a", "/c"]);
    }

    #[test]
    fn test_check_route_distinguishes_denials() {
        let perms = PermissionSet::from_menu(&menu(&["/dashboard"]));

        assert_eq!(
            check_route(false, &perms, "/dashboard"),
            RouteCheck::NotAuthenticated
        );
        assert_eq!(check_route(true, &perms, "/dashboard"), RouteCheck::Allowed);
        assert_eq!(check_route(true, &perms, "/users"), RouteCheck::NotPermitted);
    }
}
