//! # HTTP client for the TeamFinder backend
//!
//! [`ApiClient`] is a thin JSON-over-HTTP wrapper around the external
//! backend. It owns no state beyond the base URL and a shared
//! [`reqwest::Client`]; all persistence, matching, and authorization rules
//! live server-side.
//!
//! Public endpoints (`/public/*`) take no credential. Every other call takes
//! the session's bearer token and sends it as `Authorization: Bearer <token>`;
//! callers are expected not to invoke them without one.
//!
//! On native targets requests carry a bounded timeout so a dead backend
//! fails the current step instead of hanging forever. The wasm build relies
//! on the browser's fetch behavior.

use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{Identity, IdentityPatch};

use crate::error::ApiError;
use crate::models::{
    normalize_search_results, CampusEvent, NewCampusEvent, NewTeamPost, SigninResponse,
    SignupPayload, TeamPost, VerifyLoginResponse,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Client for the identity/application backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: build_http(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---- public auth endpoints -------------------------------------------

    /// Login step 1: check credentials and trigger an OTP email.
    pub async fn signin(&self, username: &str, password: &str) -> Result<SigninResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/public/signin"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        json_body(response).await
    }

    /// Login step 2: exchange the OTP for the user record and bearer token.
    pub async fn verify_login(
        &self,
        username: &str,
        otp: &str,
    ) -> Result<VerifyLoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/public/verify-login"))
            .json(&serde_json::json!({ "username": username, "otp": otp }))
            .send()
            .await?;
        json_body(response).await
    }

    /// Signup step 1: dispatch an OTP to the given address.
    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/public/otp/send"))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;
        empty_body(response).await
    }

    /// Signup step 2a: confirm possession of the email address.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/public/otp/verify"))
            .json(&serde_json::json!({ "email": email, "otp": otp }))
            .send()
            .await?;
        empty_body(response).await
    }

    /// Signup step 2b: create the account.
    pub async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/public/signup"))
            .json(payload)
            .send()
            .await?;
        empty_body(response).await
    }

    // ---- feed -------------------------------------------------------------

    pub async fn all_posts(&self, token: &str) -> Result<Vec<TeamPost>, ApiError> {
        let response = self
            .http
            .get(self.url("/post/all"))
            .bearer_auth(token)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn add_post(&self, token: &str, post: &NewTeamPost) -> Result<(), ApiError> {
        self.post_authed(token, "/post/add-post", post).await
    }

    pub async fn request_join(
        &self,
        token: &str,
        post_id: &str,
        requester: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/post/{post_id}/request")))
            .query(&[("requesterUsername", requester)])
            .bearer_auth(token)
            .send()
            .await?;
        empty_body(response).await
    }

    pub async fn accept_member(
        &self,
        token: &str,
        post_id: &str,
        owner: &str,
        target: &str,
    ) -> Result<(), ApiError> {
        self.membership_decision(token, post_id, "accept", owner, target)
            .await
    }

    pub async fn reject_member(
        &self,
        token: &str,
        post_id: &str,
        owner: &str,
        target: &str,
    ) -> Result<(), ApiError> {
        self.membership_decision(token, post_id, "reject", owner, target)
            .await
    }

    async fn membership_decision(
        &self,
        token: &str,
        post_id: &str,
        decision: &str,
        owner: &str,
        target: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/post/{post_id}/{decision}")))
            .query(&[("ownerUsername", owner), ("targetUsername", target)])
            .bearer_auth(token)
            .send()
            .await?;
        empty_body(response).await
    }

    // ---- events -----------------------------------------------------------

    pub async fn all_events(&self, token: &str) -> Result<Vec<CampusEvent>, ApiError> {
        let response = self
            .http
            .get(self.url("/events/all"))
            .bearer_auth(token)
            .send()
            .await?;
        json_body(response).await
    }

    pub async fn add_event(&self, token: &str, event: &NewCampusEvent) -> Result<(), ApiError> {
        self.post_authed(token, "/events/add", event).await
    }

    pub async fn delete_event(&self, token: &str, event_id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/events/delete/{event_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        empty_body(response).await
    }

    // ---- search and profiles ----------------------------------------------

    pub async fn search_by_name(&self, token: &str, query: &str) -> Result<Vec<Identity>, ApiError> {
        self.search(token, "search-by-name", query).await
    }

    pub async fn search_by_skill(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<Identity>, ApiError> {
        self.search(token, "search-by-skill", query).await
    }

    pub async fn search_by_username(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<Identity>, ApiError> {
        self.search(token, "search-by-username", query).await
    }

    async fn search(
        &self,
        token: &str,
        endpoint: &str,
        query: &str,
    ) -> Result<Vec<Identity>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/home/{endpoint}/{query}")))
            .bearer_auth(token)
            .send()
            .await?;
        let value: serde_json::Value = json_body(response).await?;
        Ok(normalize_search_results(value))
    }

    /// Endorse another user's profile.
    pub async fn like_profile(
        &self,
        token: &str,
        target_username: &str,
        liker: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/home/like/{target_username}")))
            .query(&[("likerUsername", liker)])
            .bearer_auth(token)
            .send()
            .await?;
        empty_body(response).await
    }

    /// Push a profile edit to the backend.
    pub async fn update_profile(&self, token: &str, patch: &IdentityPatch) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url("/user/update"))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        empty_body(response).await
    }

    async fn post_authed<T: Serialize + ?Sized>(
        &self,
        token: &str,
        path: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        empty_body(response).await
    }
}

fn build_http() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

async fn json_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(status_error(response).await)
    }
}

async fn empty_body(response: reqwest::Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/post/all"), "http://localhost:8080/post/all");
    }
}
