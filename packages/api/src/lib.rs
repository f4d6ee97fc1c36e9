//! # API crate — backend client and auth flows for TeamFinder
//!
//! Everything the client knows about the external backend lives here: the
//! JSON-over-HTTP [`ApiClient`], the wire [`models`], the [`ApiError`]
//! taxonomy, and the two stateful auth flows ([`LoginFlow`], [`SignupFlow`])
//! that sequence the credential + one-time-passcode exchanges.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest`-based calls for every endpoint (public and bearer-authenticated) |
//! | [`error`] | `ApiError`: backend rejections vs. transport failures |
//! | [`gateway`] | `AuthGateway` trait — the seam the flows are tested through |
//! | [`login`] | Login state machine: credentials, then a 6-digit code |
//! | [`signup`] | Signup state machine: form, email verification, account creation |
//! | [`models`] | Wire types (posts, events, auth responses, payloads) |
//! | [`otp`] | Code input sanitising shared by both flows |

pub mod client;
pub mod error;
pub mod gateway;
pub mod login;
pub mod models;
pub mod otp;
pub mod signup;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use gateway::AuthGateway;
pub use login::{LoginFlow, LoginState};
pub use models::{
    CampusEvent, NewCampusEvent, NewTeamPost, SigninResponse, SignupPayload, TeamPost,
    VerifyLoginResponse,
};
pub use signup::{parse_skills, SignupFlow, SignupForm, SignupState};
