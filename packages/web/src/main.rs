use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    Dashboard, Events, Feed, Home, Login, ManageTeams, PublicProfile, Search, SidebarLayout,
    Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SidebarLayout)]
        // Public
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/events")]
        Events {},
        // Guarded (each view wraps itself in RequireAuth)
        #[route("/dashboard")]
        Dashboard {},
        #[route("/search")]
        Search {},
        #[route("/feed")]
        Feed {},
        #[route("/manage-teams")]
        ManageTeams {},
        #[route("/profile/:username")]
        PublicProfile { username: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
