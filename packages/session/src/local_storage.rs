//! # localStorage backend — browser-side session persistence
//!
//! [`LocalStorageBackend`] is the [`SessionBackend`] used on the **web
//! platform**. It reads and writes `window.localStorage` via `web-sys`,
//! which is synchronous and survives page reloads and browser restarts.
//!
//! ## Error handling
//!
//! Every method silently swallows errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! persisted session" (the user just has to log in again) rather than
//! crashing the client. Persisted values are untrusted input anyway; the
//! store treats anything unparsable as a logged-out state.

use web_sys::Storage;

use crate::store::SessionBackend;

/// `window.localStorage`-backed SessionBackend for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
