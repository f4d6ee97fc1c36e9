//! Profile dashboard: view and edit the logged-in user's own profile.
//!
//! Every edit, including skill changes, goes through the shared save policy:
//! backend rejections are surfaced and nothing is applied, while transport
//! failures still apply the edit to the local session.

use dioxus::prelude::*;
use session::{ExperienceTier, Identity, IdentityPatch};
use ui::{resolve_profile_save, use_api, use_session, RequireAuth, SaveOutcome};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            DashboardInner {}
        }
    }
}

#[component]
fn DashboardInner() -> Element {
    let client = use_api();
    let mut session = use_session();

    let identity = session.read().identity().cloned().unwrap_or_default();
    let token = session
        .read()
        .token()
        .map(str::to_string)
        .unwrap_or_default();

    let mut editing = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    // Draft fields for edit mode, seeded from the current identity when the
    // user clicks Edit.
    let mut draft_name = use_signal(String::new);
    let mut draft_bio = use_signal(String::new);
    let mut draft_branch = use_signal(String::new);
    let mut draft_college = use_signal(String::new);
    let mut draft_experience = use_signal(|| ExperienceTier::Beginner);
    let mut new_skill = use_signal(String::new);

    // One save path for every edit. Applies the patch to the session unless
    // the backend explicitly rejected it.
    let save_client = client.clone();
    let save_token = token.clone();
    let save_patch = EventHandler::new(move |patch: IdentityPatch| {
        if busy() {
            return;
        }
        let client = save_client.clone();
        let token = save_token.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            notice.set(None);

            let outcome = resolve_profile_save(client.update_profile(&token, &patch).await);
            match &outcome {
                SaveOutcome::Saved => {}
                SaveOutcome::SavedLocally => {
                    notice.set(Some(
                        "Could not reach the server. Changes were saved on this device.".into(),
                    ));
                }
                SaveOutcome::Rejected(msg) => {
                    error.set(Some(msg.clone()));
                }
            }
            if outcome.applies_locally() {
                session.write().update_identity(patch);
                editing.set(false);
            }
            busy.set(false);
        });
    });

    let begin_edit = {
        let identity = identity.clone();
        move |_| {
            draft_name.set(identity.name.clone());
            draft_bio.set(identity.bio.clone());
            draft_branch.set(identity.branch.clone());
            draft_college.set(identity.college.clone());
            draft_experience.set(identity.experience_tag);
            error.set(None);
            notice.set(None);
            editing.set(true);
        }
    };

    let handle_save_details = move |evt: FormEvent| {
        evt.prevent_default();
        save_patch.call(IdentityPatch {
            name: Some(draft_name()),
            bio: Some(draft_bio()),
            branch: Some(draft_branch()),
            college: Some(draft_college()),
            experience_tag: Some(draft_experience()),
            ..IdentityPatch::default()
        });
    };

    let add_skill_identity = identity.clone();
    let handle_add_skill = move |evt: FormEvent| {
        evt.prevent_default();
        let skill = new_skill().trim().to_string();
        if skill.is_empty() || add_skill_identity.skill.contains(&skill) {
            return;
        }
        let mut skills = add_skill_identity.skill.clone();
        skills.push(skill);
        new_skill.set(String::new());
        save_patch.call(IdentityPatch {
            skill: Some(skills),
            ..IdentityPatch::default()
        });
    };

    let remove_skill_identity = identity.clone();
    let handle_remove_skill = EventHandler::new(move |skill: String| {
        let skills: Vec<String> = remove_skill_identity
            .skill
            .iter()
            .filter(|s| **s != skill)
            .cloned()
            .collect();
        save_patch.call(IdentityPatch {
            skill: Some(skills),
            ..IdentityPatch::default()
        });
    });

    rsx! {
        div { class: "dashboard-page",
            div { class: "page-header",
                h2 { "My Profile" }
                if !editing() {
                    button { class: "btn-primary", onclick: begin_edit, "Edit Profile" }
                }
            }

            if let Some(err) = notice() {
                p { class: "page-notice", "{err}" }
            }
            if let Some(err) = error() {
                p { class: "page-error", "{err}" }
            }

            if editing() {
                form { class: "profile-form", onsubmit: handle_save_details,
                    div { class: "input-group",
                        label { class: "input-label", "Full Name" }
                        input {
                            class: "auth-input",
                            r#type: "text",
                            value: "{draft_name}",
                            oninput: move |evt: FormEvent| draft_name.set(evt.value()),
                        }
                    }
                    div { class: "input-group",
                        label { class: "input-label", "Bio" }
                        textarea {
                            class: "auth-input",
                            rows: "3",
                            value: "{draft_bio}",
                            oninput: move |evt: FormEvent| draft_bio.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        div { class: "input-group",
                            label { class: "input-label", "Branch" }
                            input {
                                class: "auth-input",
                                r#type: "text",
                                value: "{draft_branch}",
                                oninput: move |evt: FormEvent| draft_branch.set(evt.value()),
                            }
                        }
                        div { class: "input-group",
                            label { class: "input-label", "College" }
                            input {
                                class: "auth-input",
                                r#type: "text",
                                value: "{draft_college}",
                                oninput: move |evt: FormEvent| draft_college.set(evt.value()),
                            }
                        }
                    }
                    div { class: "input-group",
                        label { class: "input-label", "Experience Level" }
                        select {
                            class: "auth-input",
                            value: "{draft_experience().as_str()}",
                            onchange: move |evt: FormEvent| {
                                draft_experience.set(ExperienceTier::from_form_value(&evt.value()));
                            },
                            for tier in ExperienceTier::ALL {
                                option { value: "{tier.as_str()}", "{tier.as_str()}" }
                            }
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "auth-btn",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Saving..." } else { "Save Changes" }
                        }
                        button {
                            class: "auth-btn btn-secondary",
                            r#type: "button",
                            disabled: busy(),
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                }
            } else {
                ProfileSummary { identity: identity.clone() }
            }

            div { class: "skills-section",
                h3 { "Skills" }
                div { class: "member-skills",
                    for skill in identity.skill.iter() {
                        SkillChip {
                            key: "{skill}",
                            skill: skill.clone(),
                            disabled: busy(),
                            on_remove: handle_remove_skill,
                        }
                    }
                    if identity.skill.is_empty() {
                        span { class: "page-empty", "No skills added yet." }
                    }
                }
                form { class: "skill-add", onsubmit: handle_add_skill,
                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Add a skill...",
                        value: "{new_skill}",
                        oninput: move |evt: FormEvent| new_skill.set(evt.value()),
                    }
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: busy(),
                        "Add"
                    }
                }
            }
        }
    }
}

#[component]
fn SkillChip(skill: String, disabled: bool, on_remove: EventHandler<String>) -> Element {
    let name = skill.clone();
    rsx! {
        span { class: "skill-chip",
            "{skill}"
            button {
                class: "skill-remove",
                disabled,
                onclick: move |_| on_remove.call(name.clone()),
                "×"
            }
        }
    }
}

#[component]
fn ProfileSummary(identity: Identity) -> Element {
    rsx! {
        div { class: "profile-card",
            h3 { class: "profile-name", "{identity.display_name()}" }
            p { class: "member-username", "@{identity.username}" }
            if !identity.bio.is_empty() {
                p { class: "profile-bio", "{identity.bio}" }
            }
            div { class: "profile-facts",
                if !identity.branch.is_empty() {
                    p { "Branch: {identity.branch}" }
                }
                if !identity.college.is_empty() {
                    p { "College: {identity.college}" }
                }
                p { "Experience: {identity.experience_tag.as_str()}" }
                p { "{identity.likes_received} endorsements" }
            }
        }
    }
}
