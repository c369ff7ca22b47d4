//! # Session domain models
//!
//! Defines the data the backend hands the console at login and that the
//! console persists across reloads. These types are `Serialize + Deserialize`
//! because the whole triple is stored as one JSON value in browser storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Credential`] | The bearer token pair issued at login. Only `access` is ever sent; `refresh` is stored alongside for completeness. |
//! | [`UserProfile`] | Identity shown in the chrome — username, email, optional role label. |
//! | [`MenuEntry`] | One row of the server-issued navigation menu. The menu doubles as the authorization surface: a screen is reachable iff its path appears here. |
//! | [`Session`] | The atomic triple (credential, profile, menu). Set and cleared as a unit so no observer ever sees a token without its profile or menu. |

use serde::{Deserialize, Serialize};

/// Bearer credential issued by the backend at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Access token sent as `Authorization: Bearer <access>`.
    pub access: String,
    /// Refresh token. Stored but not used by the console.
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Role label, when the backend reports one.
    #[serde(default)]
    pub role: Option<String>,
}

/// One entry of the server-issued navigation menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label. Wire field is `menu_name`.
    #[serde(rename = "menu_name")]
    pub label: String,
    /// Icon name in font-awesome style, e.g. `"fa-chart-line"`.
    #[serde(default)]
    pub icon: String,
    /// Route path the entry opens, e.g. `"/dashboard"`.
    pub path: String,
}

impl MenuEntry {
    pub fn new(
        label: impl Into<String>,
        icon: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            path: path.into(),
        }
    }
}

/// The session triple persisted across reloads.
///
/// Replaced wholesale at login and destroyed wholesale at logout or on an
/// authorization failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub credential: Credential,
    pub profile: UserProfile,
    pub menu: Vec<MenuEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_entry_wire_field() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"menu_name":"Dashboard","icon":"fa-home","path":"/dashboard"}"#)
                .unwrap();
        assert_eq!(entry.label, "Dashboard");
        assert_eq!(entry.path, "/dashboard");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"menu_name\":\"Dashboard\""));
    }

    #[test]
    fn test_credential_refresh_optional() {
        let cred: Credential = serde_json::from_str(r#"{"access":"tok"}"#).unwrap();
        assert_eq!(cred.access, "tok");
        assert!(cred.refresh.is_none());
    }
}
