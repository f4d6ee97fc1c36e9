pub mod models;
pub mod store;

mod memory;
pub use memory::MemoryBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageBackend;

pub use models::{ExperienceTier, Identity, IdentityPatch, Session};
pub use store::{SessionBackend, SessionStore, TOKEN_KEY, USER_KEY};
