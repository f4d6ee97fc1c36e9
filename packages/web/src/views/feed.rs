//! Team feed: open positions for upcoming competitions.
//!
//! Join requests are echoed into the local list as soon as the backend
//! accepts them, so the button flips to "Requested" without a refetch.

use api::models::{NewTeamPost, TeamPost};
use dioxus::prelude::*;
use session::ExperienceTier;
use ui::{use_api, use_session, RequireAuth};

#[component]
pub fn Feed() -> Element {
    rsx! {
        RequireAuth {
            FeedInner {}
        }
    }
}

#[component]
fn FeedInner() -> Element {
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
    let mut show_form = use_signal(|| false);
    let mut busy = use_signal(|| false);

    // Create-post form fields.
    let mut competition_name = use_signal(String::new);
    let mut competition_date = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut team_name = use_signal(String::new);
    let mut experience = use_signal(|| ExperienceTier::Beginner);

    // Initial load. The backend returns oldest-first; show newest on top.
    let fetch_client = client.clone();
    let fetch_token = token.clone();
    use_future(move || {
        let client = fetch_client.clone();
        let token = fetch_token.clone();
        async move {
            match client.all_posts(&token).await {
                Ok(mut list) => {
                    list.reverse();
                    posts.set(list);
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to load team posts");
                    error.set(Some("Could not load the feed. Please try again.".into()));
                }
            }
            loading.set(false);
        }
    });

    let submit_client = client.clone();
    let submit_token = token.clone();
    let submit_me = me.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = submit_client.clone();
        let token = submit_token.clone();
        let username = submit_me.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);

            let new_post = NewTeamPost {
                username,
                competition_name: competition_name(),
                competition_date: competition_date(),
                position: position(),
                experience_tag: experience(),
                team_name: team_name(),
            };

            let created = client.add_post(&token, &new_post).await;
            match created {
                Ok(()) => {
                    competition_name.set(String::new());
                    competition_date.set(String::new());
                    position.set(String::new());
                    team_name.set(String::new());
                    experience.set(ExperienceTier::Beginner);
                    show_form.set(false);

                    if let Ok(mut list) = client.all_posts(&token).await {
                        list.reverse();
                        posts.set(list);
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to create team post");
                    error.set(Some("Failed to create the post. Please try again.".into()));
                }
            }
            busy.set(false);
        });
    };

    let request_client = client.clone();
    let request_token = token.clone();
    let request_me = me.clone();
    let handle_request = EventHandler::new(move |post_id: String| {
        let client = request_client.clone();
        let token = request_token.clone();
        let requester = request_me.clone();
        spawn(async move {
            match client.request_join(&token, &post_id, &requester).await {
                Ok(()) => {
                    let mut list = posts.write();
                    if let Some(post) = list.iter_mut().find(|p| p.id == post_id) {
                        if !post.requested_usernames.contains(&requester) {
                            post.requested_usernames.push(requester.clone());
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, post_id, "join request failed");
                    error.set(Some("Could not send the join request.".into()));
                }
            }
        });
    });

    rsx! {
        div { class: "feed-page",
            div { class: "page-header",
                h2 { "Team Feed" }
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        let open = show_form();
                        show_form.set(!open);
                    },
                    if show_form() { "Close" } else { "+ Post a Requirement" }
                }
            }

            if let Some(err) = error() {
                p { class: "page-error", "{err}" }
            }

            if show_form() {
                form { class: "post-form", onsubmit: handle_create,
                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Competition name",
                        value: "{competition_name}",
                        oninput: move |evt: FormEvent| competition_name.set(evt.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "date",
                        value: "{competition_date}",
                        oninput: move |evt: FormEvent| competition_date.set(evt.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Position needed (e.g. Backend Dev)",
                        value: "{position}",
                        oninput: move |evt: FormEvent| position.set(evt.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Team name",
                        value: "{team_name}",
                        oninput: move |evt: FormEvent| team_name.set(evt.value()),
                    }
                    select {
                        class: "auth-input",
                        value: "{experience().as_str()}",
                        onchange: move |evt: FormEvent| {
                            experience.set(ExperienceTier::from_form_value(&evt.value()));
                        },
                        for tier in ExperienceTier::ALL {
                            option { value: "{tier.as_str()}", "{tier.as_str()}" }
                        }
                    }
                    button {
                        class: "auth-btn",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Posting..." } else { "Publish Post" }
                    }
                }
            }

            if loading() {
                p { class: "page-loading", "Loading feed..." }
            } else if posts.read().is_empty() {
                p { class: "page-empty", "No open positions yet. Be the first to post one." }
            } else {
                div { class: "post-list",
                    for post in posts() {
                        PostCard {
                            key: "{post.id}",
                            post: post.clone(),
                            me: me.clone(),
                            on_request: handle_request,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: TeamPost, me: String, on_request: EventHandler<String>) -> Element {
    let is_owner = post.username == me;
    let is_accepted = post.accepted_usernames.contains(&me);
    let is_requested = post.requested_usernames.contains(&me);
    let post_id = post.id.clone();

    rsx! {
        div { class: "post-card",
            div { class: "post-card-header",
                h3 { "{post.competition_name}" }
                span { class: "post-tag", "{post.experience_tag.as_str()}" }
            }
            p { class: "post-meta", "Team: {post.team_name} · {post.competition_date}" }
            p { class: "post-position", "Looking for: {post.position}" }
            p { class: "post-footer",
                span { class: "post-owner", "Posted by @{post.username}" }
                span { class: "post-size", "{post.team_size()} on the team" }
            }

            if is_owner {
                button { class: "btn-join", disabled: true, "Your Post" }
            } else if is_accepted {
                button { class: "btn-join btn-joined", disabled: true, "Joined" }
            } else if is_requested {
                button { class: "btn-join", disabled: true, "Requested" }
            } else {
                button {
                    class: "btn-join btn-join-open",
                    onclick: move |_| on_request.call(post_id.clone()),
                    "Request to Join"
                }
            }
        }
    }
}
