//! Crowd-sourced salary reports: submission and the database-backed lookup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::salary_report::{SalaryAggregateRow, SalaryReportRow};
use crate::salary::estimator::{estimate_salary, Confidence};
use crate::salary::lookup::{LookupError, RemoteSalary, SalaryLookup, SalaryQuery, SalarySource};

/// Monthly base salary bounds accepted from reporters (ILS).
pub const MIN_REPORTED_SALARY: i32 = 5_000;
pub const MAX_REPORTED_SALARY: i32 = 200_000;
pub const MAX_EXPERIENCE_YEARS: i32 = 60;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryReportInput {
    pub company_name: String,
    pub job_title: String,
    pub base_salary: i32,
    #[serde(default)]
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub total_compensation: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SalaryReportReceipt {
    pub id: Uuid,
    pub status: String,
}

pub fn validate_report(input: &SalaryReportInput) -> Result<(), AppError> {
    if input.company_name.trim().is_empty() {
        return Err(AppError::Validation("company_name is required".to_string()));
    }
    if input.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title is required".to_string()));
    }
    if !(MIN_REPORTED_SALARY..=MAX_REPORTED_SALARY).contains(&input.base_salary) {
        return Err(AppError::Validation(format!(
            "base_salary must be between ₪{MIN_REPORTED_SALARY} and ₪{MAX_REPORTED_SALARY} per month"
        )));
    }
    if let Some(years) = input.experience_years {
        if !(0..=MAX_EXPERIENCE_YEARS).contains(&years) {
            return Err(AppError::Validation(format!(
                "experience_years must be between 0 and {MAX_EXPERIENCE_YEARS}"
            )));
        }
    }
    if let Some(total) = input.total_compensation {
        if total < input.base_salary {
            return Err(AppError::Validation(
                "total_compensation cannot be lower than base_salary".to_string(),
            ));
        }
    }
    Ok(())
}

/// Stores a validated report as `pending`. Reports are reviewed out of band
/// before they count towards lookups.
pub async fn submit_salary_report(
    pool: &PgPool,
    input: &SalaryReportInput,
) -> Result<SalaryReportReceipt, AppError> {
    validate_report(input)?;

    let location = input
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    let row = sqlx::query_as::<_, SalaryReportRow>(
        r#"
        INSERT INTO salary_reports
            (id, company_name, job_title, base_salary, experience_years, location,
             total_compensation, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(input.company_name.trim())
    .bind(input.job_title.trim())
    .bind(input.base_salary)
    .bind(input.experience_years)
    .bind(location)
    .bind(input.total_compensation)
    .bind(STATUS_PENDING)
    .fetch_one(pool)
    .await?;

    info!(
        "Salary report {} received for {} / {}",
        row.id, row.company_name, row.job_title
    );

    Ok(SalaryReportReceipt {
        id: row.id,
        status: row.status,
    })
}

/// Confidence from the number of approved reports behind a figure.
pub fn confidence_for_report_count(count: i64) -> Confidence {
    if count >= 5 {
        Confidence::High
    } else if count >= 2 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Turns an aggregate row into a lookup answer; `None` when no approved
/// report exists.
pub fn salary_from_aggregate(row: &SalaryAggregateRow) -> Option<RemoteSalary> {
    if row.report_count == 0 {
        return None;
    }
    let (min, max) = (row.min_salary?, row.max_salary?);
    Some(RemoteSalary {
        min: f64::from(min),
        max: f64::from(max),
        confidence: confidence_for_report_count(row.report_count),
        source: SalarySource::Database,
    })
}

/// Heuristic answer used when the database has no approved reports.
pub fn heuristic_salary(query: &SalaryQuery) -> RemoteSalary {
    let estimate = estimate_salary(&query.to_job());
    RemoteSalary {
        min: estimate.min_monthly as f64,
        max: estimate.max_monthly as f64,
        confidence: estimate.confidence,
        source: SalarySource::Heuristic,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DbSalaryLookup
// ────────────────────────────────────────────────────────────────────────────

/// Looks up approved reports for a company + title (case-insensitive) and
/// falls back to the heuristic, tagged as such, when there are none.
#[derive(Clone)]
pub struct DbSalaryLookup {
    pool: PgPool,
}

impl DbSalaryLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalaryLookup for DbSalaryLookup {
    async fn lookup(&self, query: &SalaryQuery) -> Result<Option<RemoteSalary>, LookupError> {
        let row = sqlx::query_as::<_, SalaryAggregateRow>(
            r#"
            SELECT COUNT(*) AS report_count,
                   MIN(base_salary) AS min_salary,
                   MAX(base_salary) AS max_salary
            FROM salary_reports
            WHERE status = $1
              AND LOWER(company_name) = LOWER($2)
              AND LOWER(job_title) = LOWER($3)
            "#,
        )
        .bind(STATUS_APPROVED)
        .bind(query.company.trim())
        .bind(query.title.trim())
        .fetch_one(&self.pool)
        .await?;

        match salary_from_aggregate(&row) {
            Some(salary) => {
                debug!(
                    "{} approved reports for {} / {}",
                    row.report_count, query.company, query.title
                );
                Ok(Some(salary))
            }
            None => Ok(Some(heuristic_salary(query))),
        }
    }

    fn backend(&self) -> &'static str {
        "database"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_input(base_salary: i32) -> SalaryReportInput {
        SalaryReportInput {
            company_name: "Wiz".to_string(),
            job_title: "Backend Engineer".to_string(),
            base_salary,
            experience_years: Some(4),
            location: Some("Tel Aviv".to_string()),
            total_compensation: None,
        }
    }

    #[test]
    fn test_valid_report_passes() {
        assert!(validate_report(&make_input(42_000)).is_ok());
    }

    #[test]
    fn test_salary_bounds_are_inclusive() {
        assert!(validate_report(&make_input(5_000)).is_ok());
        assert!(validate_report(&make_input(200_000)).is_ok());
        assert!(validate_report(&make_input(4_999)).is_err());
        assert!(validate_report(&make_input(200_001)).is_err());
    }

    #[test]
    fn test_blank_company_rejected() {
        let input = SalaryReportInput {
            company_name: "   ".to_string(),
            ..make_input(30_000)
        };
        let err = validate_report(&input).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("company_name")));
    }

    #[test]
    fn test_blank_title_rejected() {
        let input = SalaryReportInput {
            job_title: String::new(),
            ..make_input(30_000)
        };
        assert!(validate_report(&input).is_err());
    }

    #[test]
    fn test_experience_out_of_range_rejected() {
        let input = SalaryReportInput {
            experience_years: Some(-1),
            ..make_input(30_000)
        };
        assert!(validate_report(&input).is_err());
    }

    #[test]
    fn test_total_compensation_below_base_rejected() {
        let input = SalaryReportInput {
            total_compensation: Some(20_000),
            ..make_input(30_000)
        };
        assert!(validate_report(&input).is_err());
    }

    #[test]
    fn test_report_count_confidence() {
        assert_eq!(confidence_for_report_count(1), Confidence::Low);
        assert_eq!(confidence_for_report_count(2), Confidence::Medium);
        assert_eq!(confidence_for_report_count(5), Confidence::High);
    }

    #[test]
    fn test_aggregate_without_reports_is_none() {
        let row = SalaryAggregateRow {
            report_count: 0,
            min_salary: None,
            max_salary: None,
        };
        assert!(salary_from_aggregate(&row).is_none());
    }

    #[test]
    fn test_aggregate_is_database_sourced() {
        let row = SalaryAggregateRow {
            report_count: 3,
            min_salary: Some(28_000),
            max_salary: Some(41_000),
        };
        let salary = salary_from_aggregate(&row).unwrap();
        assert_eq!(salary.min, 28_000.0);
        assert_eq!(salary.max, 41_000.0);
        assert_eq!(salary.confidence, Confidence::Medium);
        assert!(salary.is_crowd_data());
    }

    #[test]
    fn test_heuristic_salary_is_tagged() {
        let query = SalaryQuery {
            company: "Google".to_string(),
            title: "Senior Software Engineer".to_string(),
            level: Some("Engineer".to_string()),
            job_category: Some("software".to_string()),
            size: Some("l".to_string()),
        };
        let salary = heuristic_salary(&query);
        assert_eq!(salary.source, SalarySource::Heuristic);
        assert_eq!(salary.min, 46_000.0);
        assert_eq!(salary.max, 89_000.0);
        assert!(!salary.is_crowd_data());
    }
}
