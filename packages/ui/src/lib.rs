//! This crate contains the shared UI for the TeamFinder client: the session
//! provider/context, the access guard, and the profile-save policy.

mod session_provider;
pub use session_provider::{use_api, use_session, AppSession, PlatformBackend, SessionProvider};

mod guard;
pub use guard::RequireAuth;

mod profile;
pub use profile::{resolve_profile_save, SaveOutcome};
