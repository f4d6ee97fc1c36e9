//! Read-only view of another member's profile, looked up by username.

use dioxus::prelude::*;
use session::Identity;
use ui::{use_api, use_session, RequireAuth};

#[component]
pub fn PublicProfile(username: String) -> Element {
    rsx! {
        RequireAuth {
            PublicProfileInner { username }
        }
    }
}

#[component]
fn PublicProfileInner(username: String) -> Element {
    let client = use_api();
    let session = use_session();

    let token = session
        .read()
        .token()
        .map(str::to_string)
        .unwrap_or_default();

    let lookup = use_resource(use_reactive!(|(username,)| {
        let client = client.clone();
        let token = token.clone();
        async move {
            client
                .search_by_username(&token, &username)
                .await
                .map(|mut hits| if hits.is_empty() { None } else { Some(hits.remove(0)) })
        }
    }));

    match &*lookup.read_unchecked() {
        None => rsx! {
            p { class: "page-loading", "Loading profile..." }
        },
        Some(Err(err)) => {
            tracing::warn!(%err, "profile lookup failed");
            rsx! {
                p { class: "page-error", "Could not load this profile. Please try again." }
            }
        }
        Some(Ok(None)) => rsx! {
            p { class: "page-empty", "User not found." }
        },
        Some(Ok(Some(member))) => {
            let member = member.clone();
            rsx! {
                ProfileDetails { member }
            }
        }
    }
}

#[component]
fn ProfileDetails(member: Identity) -> Element {
    rsx! {
        div { class: "profile-page",
            div { class: "profile-card",
                h2 { class: "profile-name", "{member.display_name()}" }
                p { class: "member-username", "@{member.username}" }
                if !member.bio.is_empty() {
                    p { class: "profile-bio", "{member.bio}" }
                }
                div { class: "profile-facts",
                    if !member.branch.is_empty() {
                        p { "Branch: {member.branch}" }
                    }
                    if !member.college.is_empty() {
                        p { "College: {member.college}" }
                    }
                    p { "Experience: {member.experience_tag.as_str()}" }
                    p { "{member.likes_received} endorsements" }
                }
                div { class: "member-skills",
                    for skill in member.skill.iter() {
                        span { class: "skill-chip", "{skill}" }
                    }
                }
            }
        }
    }
}
