//! Storage abstraction for the session record.
//!
//! [`SessionStorage`] is deliberately synchronous: the session must be
//! readable before the first routing decision, so the trait mirrors the
//! browser's `localStorage` contract (string keys, string values, no
//! transactions). Implementations live in sibling modules
//! ([`crate::memory`], [`crate::local`]).

/// Synchronous key-value storage for session persistence.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
