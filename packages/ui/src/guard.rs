//! Access guard for identity-requiring views.

use dioxus::prelude::*;

use crate::use_session;

/// Renders its children only when someone is logged in; otherwise replaces
/// the current location with the login page and renders nothing.
///
/// The gate checks identity only. Capability checks (e.g. the "president"
/// marker for hosting events) belong to the views themselves, via
/// [`session::Identity::has_capability`].
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.read().is_logged_in() {
        nav.replace("/login");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
