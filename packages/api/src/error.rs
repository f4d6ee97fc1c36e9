use thiserror::Error;

/// Failure modes of a backend call.
///
/// `Status` carries whatever text the backend put in a non-2xx body, so the
/// UI can surface it verbatim (with a per-call fallback when it is empty).
/// `Network` covers transport and decode failures; it stores the error as a
/// string so it stays cloneable and constructible in tests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// True for transport-level failures (the backend was never reached or
    /// its response could not be read), as opposed to an explicit rejection.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// The backend's own error text, if it sent a non-empty body.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
