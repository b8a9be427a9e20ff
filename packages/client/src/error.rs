use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`AuthClient`](crate::AuthClient) requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received. The session is left untouched.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The backend rejected the bearer token (401/403). The persisted session
    /// has already been cleared when this is returned.
    #[error("authentication rejected ({0})")]
    AuthRejected(StatusCode),
    /// Any other non-success status, passed through unchanged.
    #[error("request failed with status {0}")]
    Status(StatusCode),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
    /// The client itself could not be built (bad header value, builder error).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error ended the session (the interceptor cleared it).
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::AuthRejected(_))
    }
}
