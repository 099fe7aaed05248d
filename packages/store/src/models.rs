//! # Session models
//!
//! The authenticated identity as it is held in memory and persisted to
//! browser storage. [`UserProfile`] is the client-safe projection of a user
//! (no credential material); [`Session`] pairs it with the opaque bearer
//! token returned by the authentication exchange.
//!
//! Both types are `Serialize + Deserialize`: the profile crosses the
//! storage boundary as a JSON blob under the `"user"` key, while the token
//! is stored as a plain string under `"token"`.

use serde::{Deserialize, Serialize};

/// The logged-in user's profile fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned user id.
    pub id: i64,
    /// Display name: "Ada Lovelace"
    pub full_name: String,
    /// Login email address.
    pub email: String,
}

/// An authenticated session: profile plus bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    /// Opaque credential attached to authenticated requests.
    pub token: String,
}

impl Session {
    pub fn new(user: UserProfile, token: String) -> Self {
        Self { user, token }
    }
}
