//! Company directory (`/api/companies`).

use serde::{Deserialize, Serialize};

use crate::{ApiError, AuthClient};

/// Company document. `status` is `"Pending"` until an admin approves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl AuthClient {
    /// All registered companies.
    pub async fn companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_json("/api/companies").await
    }

    /// One company by id.
    pub async fn company(&self, company_id: &str) -> Result<Company, ApiError> {
        self.get_json(&format!("/api/companies/{company_id}")).await
    }
}
