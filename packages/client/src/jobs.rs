//! Job postings and applications (`/api/jobs`, `/api/applications`).

use serde::{Deserialize, Serialize};

use crate::{ApiError, AuthClient};

/// Job posting document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Payload for creating a posting; the backend assigns the id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub company_id: String,
}

/// Application to a job posting.
///
/// `status` is one of `"Pending"`, `"Accepted"`, `"Rejected"` as issued by the
/// backend; kept as a string since dashboards only bucket on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub cover_letter: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyRequest<'a> {
    cover_letter: &'a str,
}

impl AuthClient {
    /// All public job postings.
    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get_json("/api/jobs").await
    }

    /// Postings belonging to one company.
    pub async fn jobs_for_company(&self, company_id: &str) -> Result<Vec<Job>, ApiError> {
        self.get_json(&format!("/api/jobs/company/{company_id}")).await
    }

    /// Postings created by one HR user.
    pub async fn jobs_for_hr(&self, hr_id: &str) -> Result<Vec<Job>, ApiError> {
        self.get_json(&format!("/api/jobs/hr/{hr_id}")).await
    }

    /// Create a posting (HR only; the backend enforces the role).
    pub async fn create_job(&self, job: &NewJob) -> Result<Job, ApiError> {
        self.post_json("/api/jobs", job).await
    }

    /// Applications received by one posting.
    pub async fn applications_for_job(&self, job_id: &str) -> Result<Vec<Application>, ApiError> {
        self.get_json(&format!("/api/applications/job/{job_id}")).await
    }

    /// The signed-in candidate's own applications.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get_json("/api/applications/my-applications").await
    }

    /// Apply to a posting as the signed-in candidate.
    pub async fn apply(&self, job_id: &str, cover_letter: &str) -> Result<Application, ApiError> {
        self.post_json(
            &format!("/api/applications/apply/{job_id}"),
            &ApplyRequest { cover_letter },
        )
        .await
    }
}
