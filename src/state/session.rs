#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStore;

/// Storage key for the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// The authenticated-identity state: token plus user profile.
///
/// The token is the single source of truth for "logged in": an empty
/// string means no session. The user record is advisory and only used
/// for display; a missing or unparsable persisted record never blocks
/// startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: String,
    pub user: Option<User>,
}

impl SessionState {
    /// Initialize the session from durable storage.
    ///
    /// A missing token yields an empty session; a malformed persisted
    /// user record degrades to "no user" rather than failing.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let token = store.read(TOKEN_KEY).unwrap_or_default();
        let user = store
            .read(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { token, user }
    }

    /// True iff the token is non-empty.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Name to show for the signed-in user: nickname if set, else the
    /// username. `None` when there is no user record.
    pub fn display_name(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|u| u.nickname.clone().unwrap_or_else(|| u.username.clone()))
            .filter(|name| !name.is_empty())
    }

    /// Replace token and user wholesale and persist both.
    pub fn set_auth(&mut self, store: &impl KeyValueStore, token: String, user: User) {
        store.write(TOKEN_KEY, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            store.write(USER_KEY, &raw);
        }
        self.token = token;
        self.user = Some(user);
    }

    /// Clear the session and remove both persisted entries. Idempotent.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = String::new();
        self.user = None;
    }
}
