use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which salary backend the cache uses.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let salary_backend = if state.config.salary_api_url.is_some() {
        "http"
    } else {
        "database"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "techmap-api",
        "salary_backend": salary_backend,
        "cached_salaries": state.salary_cache.entry_count()
    }))
}
