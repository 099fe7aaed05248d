//! # SessionStore — the single source of truth for "who is logged in"
//!
//! Owns the in-memory [`Session`] and its persisted twin: a credential
//! string under [`TOKEN_KEY`] and a JSON-serialized [`UserProfile`] under
//! [`USER_KEY`]. The two keys are always written and cleared as a pair.
//! The underlying storage has no transactions, so the pair is ordered to
//! preserve one invariant instead: a reader never observes the credential
//! without the profile.
//!
//! | Operation | Write order |
//! |-----------|-------------|
//! | [`establish`](SessionStore::establish) | profile first, then credential |
//! | [`clear`](SessionStore::clear) | credential first, then profile |
//!
//! [`initialize`](SessionStore::initialize) runs synchronously at startup,
//! before the first admission decision. Partial or corrupt persisted state
//! (credential without profile, unparsable profile JSON) is discarded and
//! both keys are cleared; the user simply has to authenticate again.

use std::sync::{Arc, Mutex};

use crate::models::Session;
use crate::storage::SessionStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "user";

/// Session lifecycle manager backed by a [`SessionStorage`].
///
/// Cheap to clone: every clone shares the same in-memory session, so the
/// gateway and the UI observe establish/clear at the same instant.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
    session: Arc<Mutex<Option<Session>>>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Arc::new(Mutex::new(None)),
        }
    }

    /// Restore a persisted session, if a consistent one exists.
    ///
    /// Both keys present and the profile parsable establishes the in-memory
    /// session; any other combination clears whatever was found and leaves
    /// the session empty.
    pub fn initialize(&self) {
        let token = self.storage.get(TOKEN_KEY);
        let profile = self.storage.get(USER_KEY);

        match (token, profile) {
            (Some(token), Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => {
                    *self.session.lock().unwrap() = Some(Session::new(user, token));
                }
                Err(err) => {
                    tracing::warn!("discarding corrupt persisted profile: {err}");
                    self.clear();
                }
            },
            (None, None) => {}
            _ => {
                tracing::warn!("discarding partial persisted session");
                self.clear();
            }
        }
    }

    /// Persist and adopt a freshly authenticated session.
    pub fn establish(&self, session: Session) {
        let profile = serde_json::to_string(&session.user).unwrap_or_default();
        self.storage.set(USER_KEY, &profile);
        self.storage.set(TOKEN_KEY, &session.token);
        *self.session.lock().unwrap() = Some(session);
    }

    /// Drop the session, in memory and in storage. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *self.session.lock().unwrap() = None;
    }

    /// Derived authentication status. Side-effect-free.
    pub fn is_authenticated(&self) -> bool {
        self.session.lock().unwrap().is_some()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// The bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::models::UserProfile;

    fn sample_session() -> Session {
        Session::new(
            UserProfile {
                id: 7,
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
            "tok-123".to_string(),
        )
    }

    #[test]
    fn establish_persists_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        assert!(!store.is_authenticated());
        store.establish(sample_session());

        assert!(store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        let raw = storage.get(USER_KEY).unwrap();
        let user: UserProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(user.full_name, "Ada Lovelace");
    }

    #[test]
    fn clear_removes_both_keys_and_is_idempotent() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.establish(sample_session());
        store.clear();

        assert!(!store.is_authenticated());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());

        // Clearing an already-empty session is not an error
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn initialize_restores_persisted_session() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).establish(sample_session());

        // A fresh store over the same storage (simulated reload)
        let store = SessionStore::new(storage);
        store.initialize();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.current().unwrap().user.id, 7);
    }

    #[test]
    fn initialize_with_credential_only_clears_both() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "orphan-token");

        let store = SessionStore::new(storage.clone());
        store.initialize();

        assert!(!store.is_authenticated());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn initialize_with_corrupt_profile_clears_both() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");
        storage.set(USER_KEY, "{not json");

        let store = SessionStore::new(storage.clone());
        store.initialize();

        assert!(!store.is_authenticated());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn initialize_with_nothing_persisted_stays_empty() {
        let store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn clones_share_one_session() {
        let store = SessionStore::new(MemoryStorage::new());
        let observer = store.clone();

        store.establish(sample_session());
        assert!(observer.is_authenticated());

        observer.clear();
        assert!(!store.is_authenticated());
    }
}
