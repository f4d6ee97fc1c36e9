//! # Session store — durable "who is logged in" state
//!
//! [`SessionStore`] is the single source of truth for the authenticated
//! [`Identity`] and its bearer token. It persists both through the
//! [`SessionBackend`] trait, so the same logic works against browser
//! `localStorage` ([`crate::LocalStorageBackend`]) and an in-memory map
//! ([`crate::MemoryBackend`]) in tests and non-web builds.
//!
//! ## Persisted layout
//!
//! Exactly two keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `teamFinderUser` | the [`Identity`] serialised as JSON |
//! | `teamFinderToken` | the raw bearer token string |
//!
//! The invariant is that both keys are present or both are absent. Every
//! mutating operation writes through to the backend before returning, and
//! [`SessionStore::initialize`] treats a half-present or unparsable pair as
//! "nobody is logged in" and removes the leftovers rather than failing.

use crate::models::{Identity, IdentityPatch, Session};

pub const USER_KEY: &str = "teamFinderUser";
pub const TOKEN_KEY: &str = "teamFinderToken";

/// Synchronous string key/value storage for session state.
///
/// Writes are best-effort: a backend that cannot persist (storage quota,
/// private browsing) must degrade silently, never panic.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory session plus its durable backing store.
#[derive(Clone, Debug)]
pub struct SessionStore<B: SessionBackend> {
    backend: B,
    current: Option<Session>,
}

impl<B: SessionBackend> SessionStore<B> {
    /// Rehydrate the session from the backend.
    ///
    /// Missing or malformed persisted data yields an empty (logged-out)
    /// store; a half-present pair is cleared so storage never stays partial.
    pub fn initialize(backend: B) -> Self {
        let identity = backend
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<Identity>(&raw).ok());
        let token = backend.get(TOKEN_KEY);

        let current = match (identity, token) {
            (Some(identity), Some(token)) => Some(Session { identity, token }),
            (None, None) => None,
            _ => {
                backend.remove(USER_KEY);
                backend.remove(TOKEN_KEY);
                None
            }
        };

        Self { backend, current }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref().map(|s| &s.identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Replace any prior session with `(identity, token)` and persist both.
    pub fn login(&mut self, identity: Identity, token: String) {
        self.persist_identity(&identity);
        self.backend.set(TOKEN_KEY, &token);
        self.current = Some(Session { identity, token });
    }

    /// Clear the in-memory session and erase both persisted keys.
    pub fn logout(&mut self) {
        self.backend.remove(USER_KEY);
        self.backend.remove(TOKEN_KEY);
        self.current = None;
    }

    /// Merge `patch` into the current identity and re-persist it.
    ///
    /// A no-op when nobody is logged in: the store stays empty and the
    /// backend is untouched.
    pub fn update_identity(&mut self, patch: IdentityPatch) {
        let Some(session) = self.current.as_mut() else {
            return;
        };
        session.identity.apply(patch);
        let identity = session.identity.clone();
        self.persist_identity(&identity);
    }

    fn persist_identity(&self, identity: &Identity) {
        if let Ok(raw) = serde_json::to_string(identity) {
            self.backend.set(USER_KEY, &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::models::ExperienceTier;

    fn alice() -> Identity {
        Identity {
            username: "alice".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            skill: vec!["Rust".into()],
            ..Identity::default()
        }
    }

    #[test]
    fn login_persists_both_keys() {
        let backend = MemoryBackend::new();
        let mut store = SessionStore::initialize(backend.clone());
        assert!(!store.is_logged_in());

        store.login(alice(), "jwt-abc".into());

        assert_eq!(store.identity().unwrap().username, "alice");
        assert_eq!(store.token(), Some("jwt-abc"));
        assert!(backend.get(USER_KEY).is_some());
        assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn login_logout_initialize_round_trip_is_empty() {
        let backend = MemoryBackend::new();
        let mut store = SessionStore::initialize(backend.clone());
        store.login(alice(), "jwt-abc".into());
        store.logout();

        assert!(backend.get(USER_KEY).is_none());
        assert!(backend.get(TOKEN_KEY).is_none());

        let rehydrated = SessionStore::initialize(backend);
        assert!(!rehydrated.is_logged_in());
    }

    #[test]
    fn initialize_rehydrates_persisted_session() {
        let backend = MemoryBackend::new();
        let mut store = SessionStore::initialize(backend.clone());
        store.login(alice(), "jwt-abc".into());

        let rehydrated = SessionStore::initialize(backend);
        assert_eq!(rehydrated.identity().unwrap().name, "Alice");
        assert_eq!(rehydrated.token(), Some("jwt-abc"));
    }

    #[test]
    fn malformed_identity_is_treated_as_logged_out() {
        let backend = MemoryBackend::new();
        backend.set(USER_KEY, "{not json");
        backend.set(TOKEN_KEY, "jwt-abc");

        let store = SessionStore::initialize(backend.clone());
        assert!(!store.is_logged_in());
        // The partial pair must not survive.
        assert!(backend.get(USER_KEY).is_none());
        assert!(backend.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn half_present_pair_is_cleared() {
        let backend = MemoryBackend::new();
        backend.set(TOKEN_KEY, "orphan-token");

        let store = SessionStore::initialize(backend.clone());
        assert!(!store.is_logged_in());
        assert!(backend.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn update_identity_on_empty_session_is_a_no_op() {
        let backend = MemoryBackend::new();
        let mut store = SessionStore::initialize(backend.clone());

        store.update_identity(IdentityPatch {
            name: Some("Mallory".into()),
            ..IdentityPatch::default()
        });

        assert!(!store.is_logged_in());
        assert!(backend.get(USER_KEY).is_none());
        assert!(backend.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn update_identity_merges_and_re_persists() {
        let backend = MemoryBackend::new();
        let mut store = SessionStore::initialize(backend.clone());
        store.login(alice(), "jwt-abc".into());

        store.update_identity(IdentityPatch {
            bio: Some("Looking for a team".into()),
            experience_tag: Some(ExperienceTier::Intermediate),
            ..IdentityPatch::default()
        });

        assert_eq!(store.identity().unwrap().bio, "Looking for a team");

        let rehydrated = SessionStore::initialize(backend);
        let identity = rehydrated.identity().unwrap();
        assert_eq!(identity.bio, "Looking for a team");
        assert_eq!(identity.experience_tag, ExperienceTier::Intermediate);
        assert_eq!(identity.name, "Alice");
    }

    #[test]
    fn login_overwrites_prior_session() {
        let backend = MemoryBackend::new();
        let mut store = SessionStore::initialize(backend.clone());
        store.login(alice(), "jwt-abc".into());

        let bob = Identity {
            username: "bob".into(),
            ..Identity::default()
        };
        store.login(bob, "jwt-def".into());

        assert_eq!(store.identity().unwrap().username, "bob");
        assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("jwt-def"));
        let persisted: Identity =
            serde_json::from_str(&backend.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted.username, "bob");
    }
}
