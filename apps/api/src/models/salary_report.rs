use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalaryReportRow {
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
    /// Monthly base salary in ILS.
    pub base_salary: i32,
    pub experience_years: Option<i32>,
    pub location: Option<String>,
    pub total_compensation: Option<i32>,
    /// pending | approved | rejected
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate over the approved reports for one company + title.
#[derive(Debug, Clone, FromRow)]
pub struct SalaryAggregateRow {
    pub report_count: i64,
    pub min_salary: Option<i32>,
    pub max_salary: Option<i32>,
}
