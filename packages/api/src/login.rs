//! # Login flow — credential check, then OTP verification
//!
//! [`LoginFlow`] is the client-side state machine for the two-step login:
//!
//! ```text
//! Idle --submit_credentials--> OtpPending --submit_otp--> Authenticated
//!   ^                              |
//!   +---------- cancel -----------+
//! ```
//!
//! Failures never advance the machine: a rejected credential pair stays on
//! `Idle` for resubmission, a rejected code stays on `OtpPending` for retry
//! with a fresh code. The flow owns the pending attempt (username, password,
//! code text, messages) and is never persisted; the step methods take
//! `&mut self`, so one flow instance cannot have two calls in flight. The
//! driving view additionally disables its submit controls while a call is
//! outstanding.

use session::Identity;

use crate::error::ApiError;
use crate::gateway::AuthGateway;
use crate::otp;

const BAD_CREDENTIALS: &str = "Invalid username or password";
const BAD_OTP: &str = "Invalid or expired OTP";
const UNREACHABLE: &str = "Could not reach the server. Please try again.";

/// Where the login attempt currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    /// Credentials accepted; a code was dispatched to the masked address.
    OtpPending { masked_email: String },
    Authenticated,
}

/// The transient login attempt. Destroyed on success, cancellation, or
/// navigation away — never written to durable storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFlow {
    pub username: String,
    pub password: String,
    pub otp: String,
    pub state: LoginState,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn otp_pending(&self) -> bool {
        matches!(self.state, LoginState::OtpPending { .. })
    }

    /// Update the code field from raw input, keeping digits only.
    pub fn set_otp(&mut self, raw: &str) {
        self.otp = otp::sanitize(raw);
    }

    pub fn otp_ready(&self) -> bool {
        otp::is_complete(&self.otp)
    }

    /// Step 1: send (username, password) to the sign-in endpoint.
    ///
    /// Does nothing unless the flow is `Idle` with both fields filled in.
    pub async fn submit_credentials<G: AuthGateway>(&mut self, gateway: &G) {
        if self.state != LoginState::Idle {
            return;
        }
        self.error = None;
        self.notice = None;
        if self.username.trim().is_empty() || self.password.is_empty() {
            self.error = Some(BAD_CREDENTIALS.to_string());
            return;
        }

        match gateway.signin(&self.username, &self.password).await {
            Ok(ack) => {
                self.state = LoginState::OtpPending {
                    masked_email: ack.email,
                };
                self.notice = Some("Please check your email for the verification code.".to_string());
            }
            Err(err) => {
                tracing::debug!("signin rejected: {err}");
                self.error = Some(match &err {
                    ApiError::Status { .. } => err
                        .backend_message()
                        .unwrap_or(BAD_CREDENTIALS)
                        .to_string(),
                    ApiError::Network(_) => UNREACHABLE.to_string(),
                });
            }
        }
    }

    /// Step 2: exchange the 6-digit code for the user record and token.
    ///
    /// Refuses, without issuing a network call, unless a code is pending
    /// and exactly six digits have been entered. On success the caller hands
    /// the returned pair to the session store; on failure the flow stays on
    /// the OTP step so a fresh code can be tried.
    pub async fn submit_otp<G: AuthGateway>(
        &mut self,
        gateway: &G,
    ) -> Option<(Identity, String)> {
        if !self.otp_pending() || !self.otp_ready() {
            return None;
        }
        self.error = None;

        match gateway.verify_login(&self.username, &self.otp).await {
            Ok(verified) => {
                self.state = LoginState::Authenticated;
                self.password.clear();
                self.otp.clear();
                self.notice = None;
                Some((verified.user, verified.token))
            }
            Err(err) => {
                tracing::debug!("otp verification rejected: {err}");
                self.error = Some(BAD_OTP.to_string());
                None
            }
        }
    }

    /// Abandon the pending code and return to the credential form.
    ///
    /// Clears the code and the password; the username is kept for
    /// resubmission. Any server-side code invalidation is the identity
    /// service's concern.
    pub fn cancel(&mut self) {
        if !self.otp_pending() {
            return;
        }
        self.state = LoginState::Idle;
        self.otp.clear();
        self.password.clear();
        self.error = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::AuthGateway;
    use crate::models::{SigninResponse, SignupPayload, VerifyLoginResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Recording fake identity service.
    #[derive(Default)]
    struct SpyGateway {
        signin_calls: AtomicUsize,
        verify_calls: AtomicUsize,
        reject_signin: Option<ApiError>,
        reject_verify: bool,
    }

    impl SpyGateway {
        fn accepting() -> Self {
            Self::default()
        }
    }

    impl AuthGateway for SpyGateway {
        async fn signin(&self, _u: &str, _p: &str) -> Result<SigninResponse, ApiError> {
            self.signin_calls.fetch_add(1, Ordering::SeqCst);
            match &self.reject_signin {
                Some(err) => Err(err.clone()),
                None => Ok(SigninResponse {
                    email: "a***@example.com".into(),
                }),
            }
        }

        async fn verify_login(&self, _u: &str, _o: &str) -> Result<VerifyLoginResponse, ApiError> {
            self.verify_calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_verify {
                return Err(ApiError::Status {
                    status: 401,
                    message: String::new(),
                });
            }
            Ok(VerifyLoginResponse {
                user: Identity {
                    username: "alice".into(),
                    ..Identity::default()
                },
                token: "jwt-abc".into(),
            })
        }

        async fn send_otp(&self, _e: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn verify_otp(&self, _e: &str, _o: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn signup(&self, _p: &SignupPayload) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn flow_with_credentials() -> LoginFlow {
        LoginFlow {
            username: "alice".into(),
            password: "correct".into(),
            ..LoginFlow::default()
        }
    }

    #[tokio::test]
    async fn happy_path_surfaces_masked_email_and_returns_session_pair() {
        let gateway = SpyGateway::accepting();
        let mut flow = flow_with_credentials();

        flow.submit_credentials(&gateway).await;
        assert_eq!(
            flow.state,
            LoginState::OtpPending {
                masked_email: "a***@example.com".into()
            }
        );
        assert!(flow.notice.is_some());
        assert!(flow.error.is_none());

        flow.set_otp("123456");
        let (identity, token) = flow.submit_otp(&gateway).await.expect("should log in");
        assert_eq!(identity.username, "alice");
        assert_eq!(token, "jwt-abc");
        assert_eq!(flow.state, LoginState::Authenticated);
        // The pending attempt is destroyed on success.
        assert!(flow.password.is_empty());
        assert!(flow.otp.is_empty());
    }

    #[tokio::test]
    async fn rejected_credentials_surface_backend_text_and_stay_idle() {
        let gateway = SpyGateway {
            reject_signin: Some(ApiError::Status {
                status: 401,
                message: "Account locked".into(),
            }),
            ..SpyGateway::default()
        };
        let mut flow = flow_with_credentials();
        flow.password = "wrong".into();

        flow.submit_credentials(&gateway).await;
        assert_eq!(flow.state, LoginState::Idle);
        assert_eq!(flow.error.as_deref(), Some("Account locked"));
    }

    #[tokio::test]
    async fn rejected_credentials_fall_back_to_generic_message() {
        let gateway = SpyGateway {
            reject_signin: Some(ApiError::Status {
                status: 401,
                message: "  ".into(),
            }),
            ..SpyGateway::default()
        };
        let mut flow = flow_with_credentials();

        flow.submit_credentials(&gateway).await;
        assert_eq!(flow.error.as_deref(), Some("Invalid username or password"));
        assert_eq!(flow.state, LoginState::Idle);
    }

    #[tokio::test]
    async fn transport_failure_keeps_flow_resubmittable() {
        let gateway = SpyGateway {
            reject_signin: Some(ApiError::Network("connection refused".into())),
            ..SpyGateway::default()
        };
        let mut flow = flow_with_credentials();

        flow.submit_credentials(&gateway).await;
        assert_eq!(flow.state, LoginState::Idle);
        assert!(flow.error.is_some());
    }

    #[tokio::test]
    async fn empty_fields_never_hit_the_network() {
        let gateway = SpyGateway::accepting();
        let mut flow = LoginFlow::new();

        flow.submit_credentials(&gateway).await;
        assert_eq!(gateway.signin_calls.load(Ordering::SeqCst), 0);
        assert!(flow.error.is_some());
    }

    #[tokio::test]
    async fn malformed_otp_is_never_submitted() {
        let gateway = SpyGateway::accepting();
        let mut flow = flow_with_credentials();
        flow.submit_credentials(&gateway).await;

        // Non-digits are stripped at entry; too-short codes block submission.
        flow.set_otp("12ab3");
        assert_eq!(flow.otp, "123");
        assert!(!flow.otp_ready());
        assert!(flow.submit_otp(&gateway).await.is_none());

        flow.set_otp("12345");
        assert!(flow.submit_otp(&gateway).await.is_none());

        assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn otp_is_not_submittable_before_credentials_are_accepted() {
        let gateway = SpyGateway::accepting();
        let mut flow = flow_with_credentials();

        flow.set_otp("123456");
        assert!(flow.submit_otp(&gateway).await.is_none());
        assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rejected_otp_allows_retry_with_fresh_code() {
        let gateway = SpyGateway {
            reject_verify: true,
            ..SpyGateway::default()
        };
        let mut flow = flow_with_credentials();
        flow.submit_credentials(&gateway).await;
        flow.set_otp("123456");

        assert!(flow.submit_otp(&gateway).await.is_none());
        assert_eq!(flow.error.as_deref(), Some("Invalid or expired OTP"));
        assert!(flow.otp_pending());
        assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_discards_code_and_password_but_keeps_username() {
        let gateway = SpyGateway::accepting();
        let mut flow = flow_with_credentials();
        flow.submit_credentials(&gateway).await;
        flow.set_otp("987654");

        flow.cancel();
        assert_eq!(flow.state, LoginState::Idle);
        assert!(flow.otp.is_empty());
        assert!(flow.password.is_empty());
        assert_eq!(flow.username, "alice");
        assert!(flow.error.is_none() && flow.notice.is_none());
    }

    #[tokio::test]
    async fn resubmission_is_ignored_once_otp_is_pending() {
        let gateway = SpyGateway::accepting();
        let mut flow = flow_with_credentials();

        flow.submit_credentials(&gateway).await;
        flow.submit_credentials(&gateway).await;
        assert_eq!(gateway.signin_calls.load(Ordering::SeqCst), 1);
    }
}
