//! Candidate portfolios (`/api/portfolios`).

use serde::{Deserialize, Serialize};

use crate::{ApiError, AuthClient};

/// Portfolio document attached to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub about: String,
}

impl AuthClient {
    /// A candidate's portfolio, if they published one.
    pub async fn portfolio_for_user(&self, user_id: &str) -> Result<Portfolio, ApiError> {
        self.get_json(&format!("/api/portfolios/user/{user_id}")).await
    }
}
