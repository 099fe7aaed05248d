pub mod collection;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use collection::{append_created, materialize, remove_by_id, Identified, Probe};
pub use models::{Session, UserProfile};
pub use session::SessionStore;
pub use storage::SessionStorage;
