//! Member search: find students by skill, name or username and endorse them.
//!
//! Endorsements are echoed into the result list locally once the backend
//! accepts them, so the count updates and the button disables immediately.

use dioxus::prelude::*;
use session::Identity;
use ui::{use_api, use_session, RequireAuth};

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum SearchKind {
    Skill,
    Name,
    Username,
}

impl SearchKind {
    const ALL: [SearchKind; 3] = [SearchKind::Skill, SearchKind::Name, SearchKind::Username];

    fn label(self) -> &'static str {
        match self {
            SearchKind::Skill => "Skill",
            SearchKind::Name => "Name",
            SearchKind::Username => "Username",
        }
    }
}

#[component]
pub fn Search() -> Element {
    rsx! {
        RequireAuth {
            SearchInner {}
        }
    }
}

#[component]
fn SearchInner() -> Element {
    let client = use_api();
    let session = use_session();

    let me = session
        .read()
        .identity()
        .map(|i| i.username.clone())
        .unwrap_or_default();
    let token = session
        .read()
        .token()
        .map(str::to_string)
        .unwrap_or_default();

    let mut query = use_signal(String::new);
    let mut kind = use_signal(|| SearchKind::Skill);
    let mut results = use_signal(Vec::<Identity>::new);
    let mut searched = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let search_client = client.clone();
    let search_token = token.clone();
    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if busy() || q.is_empty() {
            return;
        }
        let client = search_client.clone();
        let token = search_token.clone();
        let kind = kind();
        spawn(async move {
            busy.set(true);
            error.set(None);

            let found = match kind {
                SearchKind::Skill => client.search_by_skill(&token, &q).await,
                SearchKind::Name => client.search_by_name(&token, &q).await,
                SearchKind::Username => client.search_by_username(&token, &q).await,
            };

            match found {
                Ok(list) => results.set(list),
                Err(err) => {
                    tracing::warn!(%err, "member search failed");
                    results.set(Vec::new());
                    error.set(Some("Search failed. Please try again.".into()));
                }
            }
            searched.set(true);
            busy.set(false);
        });
    };

    let like_client = client.clone();
    let like_token = token.clone();
    let liker = me.clone();
    let handle_like = EventHandler::new(move |target: String| {
        let client = like_client.clone();
        let token = like_token.clone();
        let liker = liker.clone();
        spawn(async move {
            match client.like_profile(&token, &target, &liker).await {
                Ok(()) => {
                    let mut list = results.write();
                    if let Some(hit) = list.iter_mut().find(|r| r.username == target) {
                        if !hit.liked_by.contains(&liker) {
                            hit.liked_by.push(liker.clone());
                            hit.likes_received += 1;
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, target, "endorsement failed");
                    error.set(Some("Could not endorse this member.".into()));
                }
            }
        });
    });

    rsx! {
        div { class: "search-page",
            div { class: "page-header",
                h2 { "Find Members" }
            }

            form { class: "search-bar", onsubmit: handle_search,
                select {
                    class: "search-kind",
                    onchange: move |evt: FormEvent| {
                        kind.set(match evt.value().as_str() {
                            "Name" => SearchKind::Name,
                            "Username" => SearchKind::Username,
                            _ => SearchKind::Skill,
                        });
                    },
                    for option_kind in SearchKind::ALL {
                        option {
                            value: "{option_kind.label()}",
                            selected: kind() == option_kind,
                            "{option_kind.label()}"
                        }
                    }
                }
                input {
                    class: "auth-input search-input",
                    r#type: "text",
                    placeholder: "Search by {kind().label().to_lowercase()}...",
                    value: "{query}",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Searching..." } else { "Search" }
                }
            }

            if let Some(err) = error() {
                p { class: "page-error", "{err}" }
            }

            if searched() && results.read().is_empty() {
                p { class: "page-empty", "No members matched your search." }
            } else {
                div { class: "result-grid",
                    for member in results() {
                        MemberCard {
                            key: "{member.username}",
                            member: member.clone(),
                            me: me.clone(),
                            on_like: handle_like,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberCard(member: Identity, me: String, on_like: EventHandler<String>) -> Element {
    let is_me = member.username == me;
    let already_liked = member.liked_by.contains(&me);
    let username = member.username.clone();

    rsx! {
        div { class: "member-card",
            Link {
                to: Route::PublicProfile { username: member.username.clone() },
                class: "member-name",
                "{member.display_name()}"
            }
            p { class: "member-username", "@{member.username}" }
            if !member.college.is_empty() {
                p { class: "member-college", "{member.college}" }
            }
            div { class: "member-skills",
                for skill in member.skill.iter() {
                    span { class: "skill-chip", "{skill}" }
                }
            }
            div { class: "member-footer",
                span { class: "member-likes", "{member.likes_received} endorsements" }
                button {
                    class: "btn-like",
                    disabled: is_me || already_liked,
                    onclick: move |_| on_like.call(username.clone()),
                    if is_me {
                        "That's you"
                    } else if already_liked {
                        "Endorsed"
                    } else {
                        "Endorse"
                    }
                }
            }
        }
    }
}
