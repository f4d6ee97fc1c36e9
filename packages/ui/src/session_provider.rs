//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one [`SessionStore`] the whole application
//! shares, rehydrated from durable storage when the app mounts. Components
//! reach it through [`use_session`] and reach the shared [`ApiClient`]
//! through [`use_api`].

use api::ApiClient;
use dioxus::prelude::*;
use session::SessionStore;

/// Durable storage for the platform this build targets: browser
/// `localStorage` on the web, an in-memory map everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformBackend = session::LocalStorageBackend;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformBackend = session::MemoryBackend;

/// The session store as wired for this platform.
pub type AppSession = SessionStore<PlatformBackend>;

fn make_backend() -> PlatformBackend {
    PlatformBackend::new()
}

/// Get the shared session store.
/// The signal updates when the user logs in or out.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Get the shared backend client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns session state and the API client.
/// Wrap the app with this component before rendering any routes.
#[component]
pub fn SessionProvider(
    #[props(default = api::DEFAULT_BASE_URL.to_string())] base_url: String,
    children: Element,
) -> Element {
    let store = use_signal(|| AppSession::initialize(make_backend()));
    use_context_provider(|| store);
    use_context_provider(move || ApiClient::new(base_url));

    rsx! {
        {children}
    }
}
