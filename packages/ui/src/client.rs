//! Shared gateway constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate
//! [`store::SessionStorage`]:
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`store::LocalStorage`]
//! - **Native** (tests, tooling): in-memory via [`store::MemoryStorage`]

use api::{ApiClient, ApiConfig};
use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

/// The gateway type every view works with.
pub type Client = ApiClient<PlatformStorage>;

/// Create the platform-appropriate session storage.
pub fn platform_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStorage::new()
    }
}

/// Create a gateway over a fresh session store.
///
/// Most callers should go through [`crate::SessionProvider`] instead, which
/// builds one client per application and shares it via context.
pub fn make_client() -> Client {
    let store = SessionStore::new(platform_storage());
    store.initialize();
    ApiClient::new(ApiConfig::from_env(), store)
}
