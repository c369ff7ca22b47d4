pub mod config;
pub mod models;
pub mod nav;
pub mod session;

mod kv;
pub use kv::{KeyValueStore, MemoryStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::TallyConfig;
pub use models::{Credential, MenuEntry, Session, UserProfile};
pub use nav::{check_route, PermissionSet, RouteCheck};
pub use session::SessionContext;
