//! Persistent left drawer plus the routed content area.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let logged_in = session.read().is_logged_in();

    let link_class = |active: bool| {
        if active {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    let handle_logout = move |_| {
        session.write().logout();
        nav.push(Route::Login {});
    };

    rsx! {
        div { class: "app-shell",
            div { class: "sidebar",
                div { class: "sidebar-logo",
                    Link { to: Route::Home {}, class: "logo-text", "TeamFinder" }
                }

                nav { class: "nav-menu",
                    Link {
                        to: Route::Home {},
                        class: link_class(matches!(route, Route::Home {})),
                        "Home"
                    }
                    Link {
                        to: Route::Feed {},
                        class: link_class(matches!(route, Route::Feed {})),
                        "Team Feed"
                    }
                    Link {
                        to: Route::Search {},
                        class: link_class(matches!(route, Route::Search {})),
                        "Find Members"
                    }
                    Link {
                        to: Route::Events {},
                        class: link_class(matches!(route, Route::Events {})),
                        "Campus Events"
                    }
                }

                div { class: "sidebar-bottom",
                    if logged_in {
                        Link {
                            to: Route::Dashboard {},
                            class: link_class(matches!(route, Route::Dashboard {})),
                            "My Profile"
                        }
                        Link {
                            to: Route::ManageTeams {},
                            class: link_class(matches!(route, Route::ManageTeams {})),
                            "Manage Teams"
                        }
                        button { class: "btn-logout", onclick: handle_logout, "Sign Out" }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: link_class(matches!(route, Route::Login {})),
                            "Log In"
                        }
                        Link { to: Route::Signup {}, class: "nav-link signup-cta", "Sign Up" }
                    }
                }
            }

            div { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
