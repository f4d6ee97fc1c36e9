//! The seam between the auth flows and the network.
//!
//! [`LoginFlow`](crate::LoginFlow) and [`SignupFlow`](crate::SignupFlow) are
//! generic over this trait so tests can drive them with a recording fake and
//! assert which endpoints were (or were not) called.

use crate::error::ApiError;
use crate::models::{SigninResponse, SignupPayload, VerifyLoginResponse};
use crate::ApiClient;

/// The five public endpoints of the identity service.
pub trait AuthGateway {
    async fn signin(&self, username: &str, password: &str) -> Result<SigninResponse, ApiError>;
    async fn verify_login(&self, username: &str, otp: &str)
        -> Result<VerifyLoginResponse, ApiError>;
    async fn send_otp(&self, email: &str) -> Result<(), ApiError>;
    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), ApiError>;
    async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError>;
}

impl AuthGateway for ApiClient {
    async fn signin(&self, username: &str, password: &str) -> Result<SigninResponse, ApiError> {
        ApiClient::signin(self, username, password).await
    }

    async fn verify_login(
        &self,
        username: &str,
        otp: &str,
    ) -> Result<VerifyLoginResponse, ApiError> {
        ApiClient::verify_login(self, username, otp).await
    }

    async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        ApiClient::send_otp(self, email).await
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        ApiClient::verify_otp(self, email, otp).await
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        ApiClient::signup(self, payload).await
    }
}
