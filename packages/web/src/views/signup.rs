//! Signup: profile form, email verification code, then account creation.

use api::SignupFlow;
use dioxus::prelude::*;
use ui::use_api;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let client = use_api();
    let nav = use_navigator();

    let mut flow = use_signal(SignupFlow::new);
    let mut busy = use_signal(|| false);
    let verify_client = client.clone();

    // Step 1: request the OTP and lock the form.
    let handle_send_otp = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            let mut attempt = flow();
            attempt.send_otp(&client).await;
            flow.set(attempt);
            busy.set(false);
        });
    };

    // Step 2: verify the code and create the account. Signup does not log
    // the user in; route to the login page on success.
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = verify_client.clone();
        spawn(async move {
            busy.set(true);
            let mut attempt = flow();
            let created = attempt.verify_and_create(&client).await;
            flow.set(attempt);
            busy.set(false);

            if created {
                nav.push(Route::Login {});
            }
        });
    };

    let handle_edit_details = move |_| {
        if busy() {
            return;
        }
        flow.write().edit_details();
    };

    let current = flow.read().clone();

    rsx! {
        div { class: "auth-container",
            div { class: "auth-card auth-card-wide",
                h1 { class: "auth-logo", "TeamFinder" }
                p { class: "auth-subtitle", "Make the most of your professional life" }

                if let Some(err) = &current.error {
                    p { class: "auth-error", "{err}" }
                }
                if let Some(msg) = &current.notice {
                    p { class: "auth-notice", "{msg}" }
                }

                if current.otp_dispatched() {
                    form { onsubmit: handle_verify,
                        div { class: "otp-label",
                            label {
                                "Enter the 6-digit code sent to"
                                br {}
                                strong { class: "otp-destination", "{current.form.email}" }
                            }
                        }

                        input {
                            class: "auth-input otp-input",
                            r#type: "text",
                            maxlength: "6",
                            placeholder: "000000",
                            value: "{current.otp}",
                            oninput: move |evt: FormEvent| flow.write().set_otp(&evt.value()),
                        }

                        button {
                            class: "auth-btn",
                            r#type: "submit",
                            disabled: busy() || !current.otp_ready(),
                            if busy() { "Verifying..." } else { "Verify & Create Account" }
                        }

                        button {
                            class: "auth-btn btn-secondary",
                            r#type: "button",
                            disabled: busy(),
                            onclick: handle_edit_details,
                            "Change Email / Edit Details"
                        }
                    }
                } else {
                    form { onsubmit: handle_send_otp,
                        div { class: "input-group",
                            label { class: "input-label", "Full Name *" }
                            input {
                                class: "auth-input",
                                r#type: "text",
                                placeholder: "Garv Sharma",
                                value: "{current.form.name}",
                                oninput: move |evt: FormEvent| flow.write().form.name = evt.value(),
                            }
                        }

                        div { class: "input-group",
                            label { class: "input-label", "Username *" }
                            input {
                                class: "auth-input",
                                r#type: "text",
                                placeholder: "garv_sharma",
                                value: "{current.form.username}",
                                oninput: move |evt: FormEvent| flow.write().form.username = evt.value(),
                            }
                        }

                        div { class: "input-group",
                            label { class: "input-label", "Email Address *" }
                            input {
                                class: "auth-input",
                                r#type: "email",
                                placeholder: "you@college.edu",
                                value: "{current.form.email}",
                                oninput: move |evt: FormEvent| flow.write().form.email = evt.value(),
                            }
                        }

                        div { class: "input-group",
                            label { class: "input-label", "Password *" }
                            input {
                                class: "auth-input",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: "{current.form.password}",
                                oninput: move |evt: FormEvent| flow.write().form.password = evt.value(),
                            }
                        }

                        div { class: "form-divider", span { "Optional Profile Details" } }

                        div { class: "form-row",
                            div { class: "input-group",
                                label { class: "input-label",
                                    "Branch "
                                    span { class: "optional-tag", "(Optional)" }
                                }
                                input {
                                    class: "auth-input",
                                    r#type: "text",
                                    placeholder: "Computer Science",
                                    value: "{current.form.branch}",
                                    oninput: move |evt: FormEvent| flow.write().form.branch = evt.value(),
                                }
                            }
                            div { class: "input-group",
                                label { class: "input-label",
                                    "College "
                                    span { class: "optional-tag", "(Optional)" }
                                }
                                input {
                                    class: "auth-input",
                                    r#type: "text",
                                    placeholder: "Tech University",
                                    value: "{current.form.college}",
                                    oninput: move |evt: FormEvent| flow.write().form.college = evt.value(),
                                }
                            }
                        }

                        div { class: "input-group",
                            label { class: "input-label",
                                "Skills "
                                span { class: "optional-tag", "(Comma separated, Optional)" }
                            }
                            input {
                                class: "auth-input",
                                r#type: "text",
                                placeholder: "Java, React, Python...",
                                value: "{current.form.skills_text}",
                                oninput: move |evt: FormEvent| flow.write().form.skills_text = evt.value(),
                            }
                        }

                        button {
                            class: "auth-btn",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Sending OTP..." } else { "Send Verification OTP" }
                        }
                    }
                }

                div { class: "auth-footer",
                    "Already on TeamFinder? "
                    Link { to: Route::Login {}, class: "auth-link", "Sign in" }
                }
            }
        }
    }
}
