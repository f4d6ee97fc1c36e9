//! Landing page.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let logged_in = session.read().is_logged_in();

    rsx! {
        div { class: "home-page",
            section { class: "hero",
                h1 { class: "hero-title", "Find your next team." }
                p { class: "hero-tagline",
                    "TeamFinder connects students across campus for hackathons, "
                    "competitions and club events. Post what you need, or join a "
                    "team that needs you."
                }
                if logged_in {
                    Link { to: Route::Feed {}, class: "hero-cta", "Browse the Feed" }
                } else {
                    Link { to: Route::Signup {}, class: "hero-cta", "Get Started" }
                }
            }

            section { class: "feature-grid",
                div { class: "feature-card",
                    h3 { "Team Feed" }
                    p { "Post open positions for upcoming competitions and review join requests from interested students." }
                }
                div { class: "feature-card",
                    h3 { "Find Members" }
                    p { "Search profiles by skill, name or username and endorse the people you have worked with." }
                }
                div { class: "feature-card",
                    h3 { "Campus Events" }
                    p { "One place for official hackathons and club events, posted by club presidents." }
                }
            }
        }
    }
}
