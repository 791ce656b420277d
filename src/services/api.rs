//! Thin client for the scrape backend API.
//!
//! Covers the three endpoints the dashboard depends on: the job listing,
//! per-job detail records, and multipart scrape submission.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::{JobDetail, JobId, JobSummary};

/// Form payload for `POST /scrape`: either a target URL or the marker
/// telling the backend to scrape its bundled sample page.
#[derive(Debug, Clone, Default)]
pub struct ScrapeForm {
    pub url: String,
    pub use_sample: bool,
}

impl ScrapeForm {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            use_sample: false,
        }
    }

    pub fn for_sample() -> Self {
        Self {
            url: String::new(),
            use_sample: true,
        }
    }
}

#[derive(Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    job: Option<JobDetail>,
    #[serde(default)]
    error: Option<String>,
}

/// Failures split into transport-level problems (network errors, bare
/// non-2xx statuses) and application-level refusals carrying an `error`
/// payload, which are surfaced verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("{0}")]
    Application(String),

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

/// Client for the scrape backend.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("scrape-dashboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /api/jobs` — the full listing, newest first.
    pub async fn list_jobs(&self) -> Result<Vec<JobSummary>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/jobs", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// `GET /api/jobs/{id}` — the full result record for one job.
    pub async fn job_detail(&self, id: &JobId) -> Result<JobDetail, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/jobs/{id}", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// `POST /scrape` — trigger a new scrape and return its full result.
    ///
    /// Failure responses still carry a JSON `{"error": ...}` body; that
    /// message wins over the bare status code.
    pub async fn submit_scrape(&self, form: &ScrapeForm) -> Result<JobDetail, ApiError> {
        let mut multipart = reqwest::multipart::Form::new();
        if form.use_sample {
            multipart = multipart.text("use_sample", "1");
        } else {
            multipart = multipart.text("url", form.url.trim().to_string());
        }

        let response = self
            .http
            .post(format!("{}/scrape", self.base_url))
            .multipart(multipart)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        let decoded: ScrapeResponse = match serde_json::from_slice(&body) {
            Ok(decoded) => decoded,
            Err(e) if status.is_success() => return Err(ApiError::Decode(e.to_string())),
            Err(_) => return Err(ApiError::Status(status)),
        };

        if let Some(error) = decoded.error {
            return Err(ApiError::Application(error));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        decoded
            .job
            .ok_or_else(|| ApiError::Decode("response carried neither job nor error".to_string()))
    }
}
