use sqlx::PgPool;

use crate::config::Config;
use crate::salary::cache::SalaryCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// API-backed salary cache. Its lookup backend is either the local
    /// database or an upstream service, chosen from `SALARY_API_URL`.
    pub salary_cache: SalaryCache,
}
