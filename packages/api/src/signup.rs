//! # Signup flow — email verification before account creation
//!
//! [`SignupFlow`] drives the three-state signup:
//!
//! ```text
//! FormEditing --send_otp--> OtpDispatched --verify_and_create--> AccountCreated
//!      ^                         |
//!      +------ edit_details -----+
//! ```
//!
//! Once the code is dispatched the form is locked (the email in particular
//! cannot change without going back via `edit_details`, which keeps every
//! entered value but discards the code). Account creation happens in two
//! backend calls: verify `(email, otp)`, then POST the signup payload with
//! the skills text parsed into individual tags. Creation success does not
//! log the user in; the caller routes to the login page.

use crate::error::ApiError;
use crate::gateway::AuthGateway;
use crate::models::SignupPayload;
use crate::otp;

const BAD_OTP: &str = "Invalid or expired OTP. Please try again.";
const SEND_FAILED: &str = "Failed to send OTP. Please ensure your email is correct.";
const CREATE_FAILED: &str = "Failed to create account. Username may already exist.";
const MISSING_FIELDS: &str = "Please fill in your name, username, email and password.";

/// Split a comma-separated skills string into individual tags.
///
/// Whitespace is trimmed and empty segments dropped; an empty input yields
/// an empty list (the payload always carries `skill`, never null).
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Where the signup attempt currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupState {
    #[default]
    FormEditing,
    OtpDispatched,
    AccountCreated,
}

/// The signup form as entered. `skills_text` stays free text until the
/// account-creation payload is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub branch: String,
    pub college: String,
    pub skills_text: String,
}

impl SignupForm {
    fn required_fields_present(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
    }

    fn to_payload(&self) -> SignupPayload {
        SignupPayload {
            name: self.name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            branch: self.branch.clone(),
            college: self.college.clone(),
            skill: parse_skills(&self.skills_text),
        }
    }
}

/// Transient signup attempt; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupFlow {
    pub form: SignupForm,
    pub otp: String,
    pub state: SignupState,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn otp_dispatched(&self) -> bool {
        self.state == SignupState::OtpDispatched
    }

    pub fn set_otp(&mut self, raw: &str) {
        self.otp = otp::sanitize(raw);
    }

    pub fn otp_ready(&self) -> bool {
        otp::is_complete(&self.otp)
    }

    /// Step 1: request a code for the entered email and lock the form.
    ///
    /// Required fields are validated client-side; nothing is sent while one
    /// is missing.
    pub async fn send_otp<G: AuthGateway>(&mut self, gateway: &G) {
        if self.state != SignupState::FormEditing {
            return;
        }
        self.error = None;
        self.notice = None;
        if !self.form.required_fields_present() {
            self.error = Some(MISSING_FIELDS.to_string());
            return;
        }

        match gateway.send_otp(self.form.email.trim()).await {
            Ok(()) => {
                self.state = SignupState::OtpDispatched;
                self.notice = Some("OTP sent! Please check your email inbox.".to_string());
            }
            Err(err) => {
                tracing::debug!("otp dispatch failed: {err}");
                self.error = Some(SEND_FAILED.to_string());
            }
        }
    }

    /// Step 2: verify the code, then create the account.
    ///
    /// Returns true once the account exists; the caller is expected to route
    /// to login (signup does not establish a session). A failed verification
    /// or creation keeps the flow on the OTP step.
    pub async fn verify_and_create<G: AuthGateway>(&mut self, gateway: &G) -> bool {
        if !self.otp_dispatched() || !self.otp_ready() {
            return false;
        }
        self.error = None;

        if let Err(err) = gateway.verify_otp(self.form.email.trim(), &self.otp).await {
            tracing::debug!("signup otp rejected: {err}");
            self.error = Some(BAD_OTP.to_string());
            return false;
        }

        let payload = self.form.to_payload();
        match gateway.signup(&payload).await {
            Ok(()) => {
                self.state = SignupState::AccountCreated;
                self.notice = None;
                true
            }
            Err(err) => {
                self.error = Some(match &err {
                    ApiError::Status { .. } => {
                        err.backend_message().unwrap_or(CREATE_FAILED).to_string()
                    }
                    ApiError::Network(_) => CREATE_FAILED.to_string(),
                });
                false
            }
        }
    }

    /// "Change Email / Edit Details": unlock the form, discard the code.
    ///
    /// Every entered field value is preserved.
    pub fn edit_details(&mut self) {
        if !self.otp_dispatched() {
            return;
        }
        self.state = SignupState::FormEditing;
        self.otp.clear();
        self.error = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SigninResponse, VerifyLoginResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyGateway {
        send_calls: AtomicUsize,
        verify_calls: AtomicUsize,
        signup_payloads: Mutex<Vec<SignupPayload>>,
        reject_send: bool,
        reject_verify: bool,
        reject_signup: Option<ApiError>,
    }

    impl AuthGateway for SpyGateway {
        async fn signin(&self, _u: &str, _p: &str) -> Result<SigninResponse, ApiError> {
            unreachable!("signup flow never signs in")
        }

        async fn verify_login(&self, _u: &str, _o: &str) -> Result<VerifyLoginResponse, ApiError> {
            unreachable!("signup flow never verifies a login")
        }

        async fn send_otp(&self, _e: &str) -> Result<(), ApiError> {
            self.send_calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_send {
                return Err(ApiError::Status {
                    status: 400,
                    message: String::new(),
                });
            }
            Ok(())
        }

        async fn verify_otp(&self, _e: &str, _o: &str) -> Result<(), ApiError> {
            self.verify_calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_verify {
                return Err(ApiError::Status {
                    status: 401,
                    message: String::new(),
                });
            }
            Ok(())
        }

        async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
            self.signup_payloads.lock().unwrap().push(payload.clone());
            match &self.reject_signup {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn filled_flow() -> SignupFlow {
        SignupFlow {
            form: SignupForm {
                name: "Garv Sharma".into(),
                username: "garv_sharma".into(),
                password: "hunter22".into(),
                email: "garv@college.edu".into(),
                branch: "Computer Science".into(),
                college: "Tech University".into(),
                skills_text: "Java, React ,  Python".into(),
            },
            ..SignupFlow::default()
        }
    }

    #[test]
    fn skills_parsing_trims_and_drops_empties() {
        assert_eq!(
            parse_skills("Java, React ,  Python"),
            vec!["Java", "React", "Python"]
        );
        assert_eq!(parse_skills(""), Vec::<String>::new());
        assert_eq!(parse_skills(" , ,"), Vec::<String>::new());
        assert_eq!(parse_skills("Rust"), vec!["Rust"]);
    }

    #[tokio::test]
    async fn happy_path_creates_account_without_a_session() {
        let gateway = SpyGateway::default();
        let mut flow = filled_flow();

        flow.send_otp(&gateway).await;
        assert_eq!(flow.state, SignupState::OtpDispatched);
        assert!(flow.notice.is_some());

        flow.set_otp("123456");
        assert!(flow.verify_and_create(&gateway).await);
        assert_eq!(flow.state, SignupState::AccountCreated);

        let payloads = gateway.signup_payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].skill, vec!["Java", "React", "Python"]);
        assert_eq!(payloads[0].username, "garv_sharma");
    }

    #[tokio::test]
    async fn blank_skills_field_yields_empty_list_not_missing() {
        let gateway = SpyGateway::default();
        let mut flow = filled_flow();
        flow.form.skills_text = String::new();

        flow.send_otp(&gateway).await;
        flow.set_otp("123456");
        assert!(flow.verify_and_create(&gateway).await);

        let payloads = gateway.signup_payloads.lock().unwrap();
        assert!(payloads[0].skill.is_empty());
        let json = serde_json::to_value(&payloads[0]).unwrap();
        assert_eq!(json["skill"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn missing_required_fields_block_the_dispatch() {
        let gateway = SpyGateway::default();
        let mut flow = filled_flow();
        flow.form.email = String::new();

        flow.send_otp(&gateway).await;
        assert_eq!(flow.state, SignupState::FormEditing);
        assert!(flow.error.is_some());
        assert_eq!(gateway.send_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_dispatch_stays_editable() {
        let gateway = SpyGateway {
            reject_send: true,
            ..SpyGateway::default()
        };
        let mut flow = filled_flow();

        flow.send_otp(&gateway).await;
        assert_eq!(flow.state, SignupState::FormEditing);
        assert!(flow.error.is_some());
    }

    #[tokio::test]
    async fn incomplete_code_never_reaches_the_verify_endpoint() {
        let gateway = SpyGateway::default();
        let mut flow = filled_flow();
        flow.send_otp(&gateway).await;

        flow.set_otp("99x9");
        assert_eq!(flow.otp, "999");
        assert!(!flow.verify_and_create(&gateway).await);
        assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 0);
        assert!(gateway.signup_payloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_code_stays_on_the_otp_step() {
        let gateway = SpyGateway {
            reject_verify: true,
            ..SpyGateway::default()
        };
        let mut flow = filled_flow();
        flow.send_otp(&gateway).await;
        flow.set_otp("123456");

        assert!(!flow.verify_and_create(&gateway).await);
        assert_eq!(flow.state, SignupState::OtpDispatched);
        assert_eq!(
            flow.error.as_deref(),
            Some("Invalid or expired OTP. Please try again.")
        );
        // Creation must not have been attempted.
        assert!(gateway.signup_payloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn creation_failure_surfaces_backend_text() {
        let gateway = SpyGateway {
            reject_signup: Some(ApiError::Status {
                status: 409,
                message: "Username already taken".into(),
            }),
            ..SpyGateway::default()
        };
        let mut flow = filled_flow();
        flow.send_otp(&gateway).await;
        flow.set_otp("123456");

        assert!(!flow.verify_and_create(&gateway).await);
        assert_eq!(flow.error.as_deref(), Some("Username already taken"));
        assert_eq!(flow.state, SignupState::OtpDispatched);
    }

    #[tokio::test]
    async fn edit_details_preserves_fields_and_discards_code() {
        let gateway = SpyGateway::default();
        let mut flow = filled_flow();
        flow.send_otp(&gateway).await;
        flow.set_otp("123456");

        flow.edit_details();
        assert_eq!(flow.state, SignupState::FormEditing);
        assert!(flow.otp.is_empty());
        assert_eq!(flow.form.name, "Garv Sharma");
        assert_eq!(flow.form.email, "garv@college.edu");
        assert_eq!(flow.form.skills_text, "Java, React ,  Python");
    }

    #[tokio::test]
    async fn dispatch_is_ignored_once_code_is_out() {
        let gateway = SpyGateway::default();
        let mut flow = filled_flow();

        flow.send_otp(&gateway).await;
        flow.send_otp(&gateway).await;
        assert_eq!(gateway.send_calls.load(Ordering::SeqCst), 1);
    }
}
