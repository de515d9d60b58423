//! Salary Lookup — pluggable, trait-based source of crowd-sourced salary data.
//!
//! Backends:
//! - `DbSalaryLookup` (see `reports`): aggregates approved reports in Postgres.
//! - `HttpSalaryLookup`: asks an upstream instance of this service over HTTP.
//!
//! `AppState` holds the chosen backend inside the `SalaryCache`, picked at
//! startup from `SALARY_API_URL`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::job::JobDescriptor;
use crate::salary::estimator::{Confidence, SalaryEstimate};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Inputs sent to a salary lookup backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryQuery {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub job_category: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl From<&JobDescriptor> for SalaryQuery {
    fn from(job: &JobDescriptor) -> Self {
        Self {
            company: job.company.clone(),
            title: job.title.clone(),
            level: job.level().map(str::to_string),
            job_category: job.job_category().map(str::to_string),
            size: job.size().map(str::to_string),
        }
    }
}

impl SalaryQuery {
    pub fn to_job(&self) -> JobDescriptor {
        JobDescriptor {
            title: self.title.clone(),
            company: self.company.clone(),
            category: self.job_category.clone().unwrap_or_default(),
            level: self.level.clone(),
            size: self.size.clone(),
            job_category: self.job_category.clone(),
        }
    }
}

/// Where a backend's figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalarySource {
    /// Aggregated from approved salary reports.
    Database,
    /// Backend had no reports and fell back to the heuristic.
    Heuristic,
    #[serde(other)]
    Unknown,
}

/// Raw monthly figures returned by a lookup backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSalary {
    pub min: f64,
    pub max: f64,
    pub confidence: Confidence,
    pub source: SalarySource,
}

impl RemoteSalary {
    pub fn is_usable(&self) -> bool {
        self.min > 0.0
    }

    pub fn is_crowd_data(&self) -> bool {
        self.is_usable() && self.source == SalarySource::Database
    }

    /// Public estimate shape, or `None` when the figures are unusable.
    pub fn to_estimate(&self) -> Option<SalaryEstimate> {
        if !self.is_usable() {
            return None;
        }
        let min = self.min.round() as u64;
        let max = self.max.round().max(self.min.round()) as u64;
        Some(SalaryEstimate::from_monthly(min, max, self.confidence))
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Salary lookup timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Salary lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A source of salary figures for a company + title.
///
/// `Ok(None)` means the backend answered but has nothing for this query.
#[async_trait]
pub trait SalaryLookup: Send + Sync {
    async fn lookup(&self, query: &SalaryQuery) -> Result<Option<RemoteSalary>, LookupError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpSalaryLookup
// ────────────────────────────────────────────────────────────────────────────

/// Path of the crowd endpoint on an upstream instance.
pub const CROWD_ENDPOINT_PATH: &str = "/api/v1/salaries/crowd";

/// Calls `GET {base_url}/api/v1/salaries/crowd` on an upstream service.
#[derive(Clone)]
pub struct HttpSalaryLookup {
    client: Client,
    base_url: String,
}

impl HttpSalaryLookup {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CROWD_ENDPOINT_PATH)
    }
}

#[async_trait]
impl SalaryLookup for HttpSalaryLookup {
    async fn lookup(&self, query: &SalaryQuery) -> Result<Option<RemoteSalary>, LookupError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Upstream has no salary data for {} / {}", query.company, query.title);
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // A JSON `null` body is a valid "no data" answer.
        let salary: Option<RemoteSalary> = response.json().await?;
        Ok(salary)
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}
