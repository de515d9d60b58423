//! Axum route handlers for the Salary API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobDescriptor;
use crate::salary::cache::EstimateOrigin;
use crate::salary::company::{company_multiplier, company_tier, has_company_data, CompanyTier};
use crate::salary::estimator::{estimate_salary, MultiplierBreakdown, SalaryEstimate};
use crate::salary::format::{format_annual_salary, format_salary_range, glassdoor_search_url};
use crate::salary::lookup::{RemoteSalary, SalaryLookup, SalaryQuery};
use crate::salary::reports::{submit_salary_report, DbSalaryLookup, SalaryReportInput, SalaryReportReceipt};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FormattedSalary {
    pub monthly: String,
    pub annual: String,
}

impl From<&SalaryEstimate> for FormattedSalary {
    fn from(estimate: &SalaryEstimate) -> Self {
        Self {
            monthly: format_salary_range(estimate),
            annual: format_annual_salary(estimate),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub estimate: SalaryEstimate,
    pub formatted: FormattedSalary,
    pub multipliers: MultiplierBreakdown,
    pub company_tier: CompanyTier,
    pub has_company_data: bool,
    pub glassdoor_url: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub estimate: SalaryEstimate,
    pub formatted: FormattedSalary,
    pub origin: EstimateOrigin,
    pub has_api_data: bool,
}

#[derive(Debug, Serialize)]
pub struct CompanyTierResponse {
    pub company: String,
    pub tier: CompanyTier,
    pub multiplier: f64,
    pub has_company_data: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/salaries/estimate
///
/// Local heuristic only; never touches the cache or the database.
pub async fn handle_estimate(
    Json(job): Json<JobDescriptor>,
) -> Result<Json<EstimateResponse>, AppError> {
    let estimate = estimate_salary(&job);
    Ok(Json(EstimateResponse {
        formatted: FormattedSalary::from(&estimate),
        multipliers: MultiplierBreakdown::for_job(&job),
        company_tier: company_tier(&job.company),
        has_company_data: has_company_data(&job.company),
        glassdoor_url: glassdoor_search_url(&job),
        estimate,
    }))
}

/// POST /api/v1/salaries/lookup
///
/// Cached API estimate, falling back to the heuristic on any lookup failure
/// or empty answer.
pub async fn handle_lookup(
    State(state): State<AppState>,
    Json(job): Json<JobDescriptor>,
) -> Result<Json<LookupResponse>, AppError> {
    let (estimate, origin) = state.salary_cache.resolve_estimate(&job).await;
    Ok(Json(LookupResponse {
        formatted: FormattedSalary::from(&estimate),
        has_api_data: state.salary_cache.has_api_salary_data(&job),
        estimate,
        origin,
    }))
}

/// GET /api/v1/salaries/crowd
///
/// Raw database answer for an upstream `HttpSalaryLookup`. Bypasses the cache.
pub async fn handle_crowd(
    State(state): State<AppState>,
    Query(query): Query<SalaryQuery>,
) -> Result<Json<Option<RemoteSalary>>, AppError> {
    if query.company.trim().is_empty() || query.title.trim().is_empty() {
        return Err(AppError::Validation(
            "company and title are required".to_string(),
        ));
    }

    let salary = DbSalaryLookup::new(state.db.clone()).lookup(&query).await?;
    Ok(Json(salary))
}

/// POST /api/v1/salaries/reports
pub async fn handle_submit_report(
    State(state): State<AppState>,
    Json(input): Json<SalaryReportInput>,
) -> Result<(StatusCode, Json<SalaryReportReceipt>), AppError> {
    let receipt = submit_salary_report(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /api/v1/companies/:name/tier
pub async fn handle_company_tier(
    Path(name): Path<String>,
) -> Result<Json<CompanyTierResponse>, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("company name cannot be empty".to_string()));
    }

    Ok(Json(CompanyTierResponse {
        tier: company_tier(&name),
        multiplier: company_multiplier(&name),
        has_company_data: has_company_data(&name),
        company: name,
    }))
}
