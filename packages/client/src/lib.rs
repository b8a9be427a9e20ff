//! # Client crate — authenticated HTTP plumbing for the TuniHire panels
//!
//! Every panel talks to the shared REST backend through [`AuthClient`], a
//! `reqwest` client preconfigured with the backend base URL, a fixed request
//! timeout, and — when a session exists at construction time — an
//! `Authorization: Bearer <token>` default header.
//!
//! All responses funnel through a single policy:
//!
//! - transport errors (no response received) pass through as
//!   [`ApiError::Network`] and never touch the session, so a flaky connection
//!   does not log anyone out;
//! - 401/403 clears the persisted session before the error is surfaced as
//!   [`ApiError::AuthRejected`];
//! - other non-success statuses pass through unchanged.
//!
//! Endpoint wrappers live in [`users`], [`jobs`], [`companies`] and
//! [`portfolios`]; pages needing several resources at once fan out with
//! [`join_independent`]. There is no retry and no cancellation: a failed
//! request surfaces as an error for the page to present, and an abandoned one
//! simply has its result discarded.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{PanelConfig, SessionManager};

pub mod companies;
pub mod error;
pub mod fanout;
pub mod jobs;
pub mod portfolios;
pub mod users;

pub use error::ApiError;
pub use fanout::join_independent;
pub use reqwest::StatusCode;

/// HTTP client preconfigured for the TuniHire backend.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
    sessions: SessionManager,
}

impl AuthClient {
    /// Build a client from panel configuration and the session manager.
    ///
    /// The bearer header is captured at construction time; after a sign-in or
    /// sign-out the caller builds a fresh client to pick up the new token.
    pub fn new(config: &PanelConfig, sessions: SessionManager) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = sessions.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::Config(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.api.timeout_secs));
        let http = builder.build().map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            sessions,
        })
    }

    /// The session manager this client clears on auth rejection.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path))).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Single enforcement point for the response policy.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        // No response at all means a transport problem; leave the session
        // alone so a transient outage does not force a spurious logout.
        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(%status, "authentication rejected, clearing session");
            if !self.sessions.clear_user_data() {
                tracing::error!("failed to clear session after auth rejection");
            }
            return Err(ApiError::AuthRejected(status));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response)
    }
}
