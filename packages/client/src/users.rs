//! Authentication endpoints (`/api/users/*`).

use serde::{Deserialize, Serialize};
use session::{PanelConfig, User};

use crate::{ApiError, AuthClient};

/// Response of `POST /api/users/signin`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    user: User,
}

#[derive(Debug, Deserialize)]
struct TokenValidation {
    valid: bool,
}

impl AuthClient {
    /// Exchange credentials for a bearer token and the signed-in profile.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        self.post_json("/api/users/signin", &SignInRequest { email, password })
            .await
    }

    /// Fetch the profile behind the configured bearer token.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self.get_json("/api/users/me").await?;
        Ok(response.user)
    }

    /// Ask the backend whether the bearer token is still accepted.
    pub async fn validate_token(&self) -> Result<bool, ApiError> {
        let response: TokenValidation = self.get_json("/api/users/validate-token").await?;
        Ok(response.valid)
    }

    /// Invalidate the token server side. Clearing local state is the caller's
    /// decision, not a side effect of this call.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.post_empty("/api/users/signout").await
    }
}

/// Fetch the profile behind an explicit token, bypassing the stored session.
///
/// Used by the handoff receiving side to validate a URL token *before*
/// persisting it. Deliberately not routed through [`AuthClient`]: a rejected
/// handoff token must not clear whatever session is already stored.
pub async fn fetch_profile(config: &PanelConfig, token: &str) -> Result<User, ApiError> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(config.api.timeout_secs));
    let http = builder.build().map_err(|e| ApiError::Config(e.to_string()))?;

    let url = format!(
        "{}/api/users/me",
        config.api.base_url.trim_end_matches('/')
    );
    let response = http
        .get(url)
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .map_err(ApiError::Network)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let body: MeResponse = response.json().await.map_err(ApiError::Decode)?;
    Ok(body.user)
}
