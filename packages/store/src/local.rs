//! # localStorage backend — browser-side session persistence
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the
//! **web platform**. It reads and writes the browser's `window.localStorage`
//! directly, which keeps the whole session-restore path synchronous: the
//! stored credential and profile are available before the router makes its
//! first admission decision.
//!
//! ## Error handling
//!
//! All methods silently swallow platform errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "never logged in" rather than crashing; the authoritative session state
//! always lives on the remote API.

use crate::storage::SessionStorage;

/// localStorage-backed SessionStorage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}
