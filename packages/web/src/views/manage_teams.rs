//! Owner's view of their own team posts: review and decide join requests.
//!
//! Decisions are applied to the local list as soon as the backend accepts
//! them: accept moves the requester into the team, reject drops them.

use api::models::TeamPost;
use dioxus::prelude::*;
use ui::{use_api, use_session, RequireAuth};

#[derive(Clone, PartialEq)]
struct Decision {
    post_id: String,
    requester: String,
    accept: bool,
}

/// The owner's posts, newest on top. The backend returns oldest-first, same
/// as the feed.
fn own_posts_newest_first(posts: Vec<TeamPost>, owner: &str) -> Vec<TeamPost> {
    let mut mine: Vec<TeamPost> = posts.into_iter().filter(|p| p.username == owner).collect();
    mine.reverse();
    mine
}

#[component]
pub fn ManageTeams() -> Element {
    rsx! {
        RequireAuth {
            ManageTeamsInner {}
        }
    }
}

#[component]
fn ManageTeamsInner() -> Element {
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

    let mut posts = use_signal(Vec::<TeamPost>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    let fetch_client = client.clone();
    let fetch_token = token.clone();
    let fetch_me = me.clone();
    use_future(move || {
        let client = fetch_client.clone();
        let token = fetch_token.clone();
        let me = fetch_me.clone();
        async move {
            match client.all_posts(&token).await {
                Ok(list) => posts.set(own_posts_newest_first(list, &me)),
                Err(err) => {
                    tracing::warn!(%err, "failed to load own team posts");
                    error.set(Some("Could not load your posts. Please try again.".into()));
                }
            }
            loading.set(false);
        }
    });

    let decide_client = client.clone();
    let decide_token = token.clone();
    let decide_me = me.clone();
    let handle_decision = EventHandler::new(move |decision: Decision| {
        let client = decide_client.clone();
        let token = decide_token.clone();
        let owner = decide_me.clone();
        spawn(async move {
            let Decision {
                post_id,
                requester,
                accept,
            } = decision;

            let result = if accept {
                client
                    .accept_member(&token, &post_id, &owner, &requester)
                    .await
            } else {
                client
                    .reject_member(&token, &post_id, &owner, &requester)
                    .await
            };

            match result {
                Ok(()) => {
                    let mut list = posts.write();
                    if let Some(post) = list.iter_mut().find(|p| p.id == post_id) {
                        post.requested_usernames.retain(|u| u != &requester);
                        if accept && !post.accepted_usernames.contains(&requester) {
                            post.accepted_usernames.push(requester.clone());
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, post_id, "membership decision failed");
                    error.set(Some("Could not apply that decision. Please try again.".into()));
                }
            }
        });
    });

    rsx! {
        div { class: "manage-page",
            div { class: "page-header",
                h2 { "Manage Teams" }
            }

            if let Some(err) = error() {
                p { class: "page-error", "{err}" }
            }

            if loading() {
                p { class: "page-loading", "Loading your posts..." }
            } else if posts.read().is_empty() {
                p { class: "page-empty", "You have no team posts yet." }
            } else {
                div { class: "post-list",
                    for post in posts() {
                        OwnedPostCard {
                            key: "{post.id}",
                            post: post.clone(),
                            on_decide: handle_decision,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OwnedPostCard(post: TeamPost, on_decide: EventHandler<Decision>) -> Element {
    rsx! {
        div { class: "post-card",
            div { class: "post-card-header",
                h3 { "{post.competition_name}" }
                span { class: "post-tag", "{post.experience_tag.as_str()}" }
            }
            p { class: "post-meta", "Team: {post.team_name} · {post.competition_date}" }
            p { class: "post-position", "Looking for: {post.position}" }

            div { class: "request-section",
                h4 { "Team ({post.team_size()})" }
                if post.accepted_usernames.is_empty() {
                    p { class: "page-empty", "No accepted members yet." }
                } else {
                    ul { class: "member-list",
                        for member in post.accepted_usernames.iter() {
                            li { "@{member}" }
                        }
                    }
                }

                h4 { "Pending Requests" }
                if post.requested_usernames.is_empty() {
                    p { class: "page-empty", "No pending requests." }
                } else {
                    for requester in post.requested_usernames.iter() {
                        RequestRow {
                            key: "{requester}",
                            post_id: post.id.clone(),
                            requester: requester.clone(),
                            on_decide,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RequestRow(post_id: String, requester: String, on_decide: EventHandler<Decision>) -> Element {
    let accept = Decision {
        post_id: post_id.clone(),
        requester: requester.clone(),
        accept: true,
    };
    let reject = Decision {
        post_id,
        requester: requester.clone(),
        accept: false,
    };

    rsx! {
        div { class: "request-row",
            span { class: "request-name", "@{requester}" }
            div { class: "request-actions",
                button {
                    class: "btn-accept",
                    onclick: move |_| on_decide.call(accept.clone()),
                    "Accept"
                }
                button {
                    class: "btn-reject",
                    onclick: move |_| on_decide.call(reject.clone()),
                    "Reject"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, owner: &str) -> TeamPost {
        TeamPost {
            id: id.into(),
            username: owner.into(),
            ..TeamPost::default()
        }
    }

    #[test]
    fn own_posts_are_filtered_and_newest_first() {
        let fetched = vec![
            post("1", "alice"),
            post("2", "bob"),
            post("3", "alice"),
            post("4", "alice"),
        ];

        let mine = own_posts_newest_first(fetched, "alice");
        let ids: Vec<&str> = mine.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3", "1"]);
    }

    #[test]
    fn no_owned_posts_yields_empty_list() {
        let fetched = vec![post("1", "bob")];
        assert!(own_posts_newest_first(fetched, "alice").is_empty());
    }
}
