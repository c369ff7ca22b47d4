//! # Session context — the single writer over the stored session
//!
//! [`SessionContext`] is the one handle through which the console reads and
//! mutates the signed-in session. It wraps a [`KeyValueStore`] and keeps an
//! in-memory snapshot of the session plus the [`PermissionSet`] derived from
//! its menu, rebuilt only when the session changes.
//!
//! ## Atomicity
//!
//! The whole triple (credential, profile, menu) is serialized as **one JSON
//! value under one storage key**, so [`set_session`](SessionContext::set_session)
//! and [`clear`](SessionContext::clear) are single-key writes. No reader can
//! observe a token without its profile or menu, across reloads included.
//!
//! ## Single writer
//!
//! Login, logout, and the 401 handler are the only callers of the two
//! mutators. Everything else — the guard, the sidebar, the HTTP client —
//! reads the snapshot through the accessor methods, which are synchronous
//! clones and safe to call from render code.

use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;
use crate::models::{Credential, MenuEntry, Session, UserProfile};
use crate::nav::PermissionSet;

/// Storage key holding the serialized session triple.
const SESSION_KEY: &str = "tally.session";

#[derive(Clone, Debug, Default)]
struct Snapshot {
    session: Option<Session>,
    permissions: PermissionSet,
}

impl Snapshot {
    fn from_session(session: Option<Session>) -> Self {
        let permissions = session
            .as_ref()
            .map(|s| PermissionSet::from_menu(&s.menu))
            .unwrap_or_default();
        Self {
            session,
            permissions,
        }
    }
}

/// Cloneable handle to the persisted session and its permission snapshot.
///
/// Construction restores whatever session the store already holds, which is
/// how a reload resumes a signed-in session.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    snapshot: Arc<Mutex<Snapshot>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let restored = store
            .get(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok());
        Self {
            store,
            snapshot: Arc::new(Mutex::new(Snapshot::from_session(restored))),
        }
    }

    /// Replace the whole session triple in one write.
    pub fn set_session(&self, session: Session) {
        if let Ok(raw) = serde_json::to_string(&session) {
            self.store.set(SESSION_KEY, &raw);
        }
        *self.snapshot.lock().unwrap() = Snapshot::from_session(Some(session));
    }

    /// Drop the session from memory and storage.
    pub fn clear(&self) {
        self.store.remove(SESSION_KEY);
        *self.snapshot.lock().unwrap() = Snapshot::default();
    }

    pub fn session(&self) -> Option<Session> {
        self.snapshot.lock().unwrap().session.clone()
    }

    pub fn credential(&self) -> Option<Credential> {
        self.snapshot
            .lock()
            .unwrap()
            .session
            .as_ref()
            .map(|s| s.credential.clone())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.snapshot
            .lock()
            .unwrap()
            .session
            .as_ref()
            .map(|s| s.profile.clone())
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        self.snapshot
            .lock()
            .unwrap()
            .session
            .as_ref()
            .map(|s| s.menu.clone())
            .unwrap_or_default()
    }

    pub fn permissions(&self) -> PermissionSet {
        self.snapshot.lock().unwrap().permissions.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.lock().unwrap().session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn sample_session() -> Session {
        Session {
            credential: Credential {
                access: "tok".to_string(),
                refresh: Some("ref".to_string()),
            },
            profile: UserProfile {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                role: None,
            },
            menu: vec![
                MenuEntry::new("Dashboard", "fa-chart-line", "/dashboard"),
                MenuEntry::new("Transactions", "fa-receipt", "/transaction"),
            ],
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let ctx = SessionContext::new(Arc::new(MemoryStore::new()));
        assert!(!ctx.is_authenticated());
        assert!(ctx.credential().is_none());
        assert!(ctx.menu().is_empty());
        assert!(!ctx.permissions().is_reachable("/dashboard"));
    }

    #[test]
    fn test_set_session_updates_all_views() {
        let ctx = SessionContext::new(Arc::new(MemoryStore::new()));
        ctx.set_session(sample_session());

        assert!(ctx.is_authenticated());
        assert_eq!(ctx.credential().unwrap().access, "tok");
        assert_eq!(ctx.profile().unwrap().username, "alice");
        assert_eq!(ctx.menu().len(), 2);
        assert!(ctx.permissions().is_reachable("/dashboard"));
        assert!(!ctx.permissions().is_reachable("/users"));
    }

    #[test]
    fn test_session_survives_context_rebuild() {
        // Simulates a page reload: a new context over the same store.
        let store = Arc::new(MemoryStore::new());
        let ctx = SessionContext::new(store.clone());
        ctx.set_session(sample_session());

        let reloaded = SessionContext::new(store);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.profile().unwrap().username, "alice");
        assert!(reloaded.permissions().is_reachable("/transaction"));
    }

    #[test]
    fn test_clear_removes_everything_at_once() {
        let store = Arc::new(MemoryStore::new());
        let ctx = SessionContext::new(store.clone());
        ctx.set_session(sample_session());

        ctx.clear();

        assert!(!ctx.is_authenticated());
        assert!(ctx.credential().is_none());
        assert!(ctx.profile().is_none());
        assert!(ctx.menu().is_empty());
        assert!(!ctx.permissions().is_reachable("/dashboard"));
        // The single storage key is gone too
        assert!(store.get("tally.session").is_none());
    }

    #[test]
    fn test_corrupt_stored_session_degrades_to_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set("tally.session", "not json");

        let ctx = SessionContext::new(store);
        assert!(!ctx.is_authenticated());
    }
}
