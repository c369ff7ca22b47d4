//! # Session lifecycle
//!
//! Login speaks to the backend in two steps: the credential exchange, then
//! the menu fetch that scopes navigation. Both must succeed before anything
//! is persisted, and persistence is one atomic write of the session triple.
//! Logout is the reverse and never waits on the network: the local session
//! is destroyed synchronously and the backend notified best-effort.

use serde::Deserialize;
use serde_json::json;
use store::{Credential, Session, SessionContext, UserProfile};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpClient, Method};
use crate::resources::{MenuItem, Resource};

const LOGIN_PATH: &str = "/api/login/";
const LOGOUT_PATH: &str = "/api/logout/";
const REGISTER_PATH: &str = "/api/register/";

/// Body returned by the login endpoint.
#[derive(Debug, Deserialize)]
struct LoginReply {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
    user: UserProfile,
}

/// Exchange credentials for a session.
///
/// Nothing is persisted unless both the token exchange and the menu fetch
/// succeed; a user whose menu cannot be loaded stays signed out rather than
/// signed in with no navigation.
pub async fn login<H: HttpClient>(
    client: &ApiClient<H>,
    username: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let reply: LoginReply = client
        .post_json(
            LOGIN_PATH,
            json!({ "username": username, "password": password }),
        )
        .await?;

    // The session does not exist yet, so the menu fetch carries the fresh
    // token explicitly.
    let rows: Vec<MenuItem> = client
        .list_with(MenuItem::ENDPOINT, Some(reply.access.clone()))
        .await?;
    let menu = rows.into_iter().map(MenuItem::into_menu_entry).collect();

    let session = Session {
        credential: Credential {
            access: reply.access,
            refresh: reply.refresh,
        },
        profile: reply.user,
        menu,
    };
    client.session().set_session(session.clone());
    tracing::info!(user = %session.profile.username, "signed in");
    Ok(session)
}

/// Destroy the local session. The console treats logout as complete the
/// moment this returns; no network round-trip is involved. The credential
/// that was signed out is handed back for [`notify_logout`].
pub fn logout(session: &SessionContext) -> Option<Credential> {
    let credential = session.credential();
    session.clear();
    tracing::info!("signed out");
    credential
}

/// Best-effort backend notification after [`logout`]. Failures are traced
/// and otherwise ignored; the local session is already gone.
pub async fn notify_logout<H: HttpClient>(client: &ApiClient<H>, credential: Credential) {
    let body = match &credential.refresh {
        Some(refresh) => json!({ "refresh": refresh }),
        None => json!({}),
    };
    if let Err(error) = client
        .request(
            Method::Post,
            LOGOUT_PATH,
            Some(credential.access),
            Some(body),
        )
        .await
    {
        tracing::debug!(%error, "logout notification failed");
    }
}

/// Create an account. No session is created; the caller routes to login.
pub async fn register<H: HttpClient>(
    client: &ApiClient<H>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    client
        .request(
            Method::Post,
            REGISTER_PATH,
            None,
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
            })),
        )
        .await?;
    Ok(())
}
