//! Two-step login: credentials first, then the emailed 6-digit code.

use api::{LoginFlow, LoginState};
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut flow = use_signal(LoginFlow::new);
    let mut busy = use_signal(|| false);
    let verify_client = client.clone();

    // Already logged in: nothing to do here.
    if session.read().is_logged_in() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    // Step 1: validate credentials and trigger the OTP email.
    let handle_credentials = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            let mut attempt = flow();
            attempt.submit_credentials(&client).await;
            flow.set(attempt);
            busy.set(false);
        });
    };

    // Step 2: verify the code and establish the session.
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = verify_client.clone();
        spawn(async move {
            busy.set(true);
            let mut attempt = flow();
            let outcome = attempt.submit_otp(&client).await;
            flow.set(attempt);
            busy.set(false);

            if let Some((identity, token)) = outcome {
                session.write().login(identity, token);
                nav.push(Route::Dashboard {});
            }
        });
    };

    let handle_cancel = move |_| {
        if busy() {
            return;
        }
        flow.write().cancel();
    };

    let current = flow.read().clone();
    let masked_email = match &current.state {
        LoginState::OtpPending { masked_email } => masked_email.clone(),
        _ => String::new(),
    };

    rsx! {
        div { class: "auth-container",
            div { class: "auth-card",
                h1 { class: "auth-logo", "TeamFinder" }
                p { class: "auth-subtitle", "Stay updated on your professional world" }

                if let Some(err) = &current.error {
                    p { class: "auth-error", "{err}" }
                }
                if let Some(msg) = &current.notice {
                    p { class: "auth-notice", "{msg}" }
                }

                if current.otp_pending() {
                    form { onsubmit: handle_verify,
                        div { class: "otp-label",
                            label {
                                "Enter the 6-digit code sent to"
                                br {}
                                span { class: "otp-destination", "{masked_email}" }
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
                            if busy() { "Authenticating..." } else { "Verify & Log In" }
                        }

                        button {
                            class: "auth-btn btn-secondary",
                            r#type: "button",
                            disabled: busy(),
                            onclick: handle_cancel,
                            "Cancel"
                        }
                    }
                } else {
                    form { onsubmit: handle_credentials,
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Username",
                            value: "{current.username}",
                            oninput: move |evt: FormEvent| flow.write().username = evt.value(),
                        }
                        input {
                            class: "auth-input",
                            r#type: "password",
                            placeholder: "Password",
                            value: "{current.password}",
                            oninput: move |evt: FormEvent| flow.write().password = evt.value(),
                        }
                        button {
                            class: "auth-btn",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Verifying..." } else { "Sign In" }
                        }
                    }
                }

                div { class: "auth-footer",
                    "New to TeamFinder? "
                    Link { to: Route::Signup {}, class: "auth-link", "Join now" }
                }
            }
        }
    }
}
