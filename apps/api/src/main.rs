mod config;
mod db;
mod errors;
mod models;
mod routes;
mod salary;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::salary::cache::{SalaryCache, SystemClock};
use crate::salary::lookup::{HttpSalaryLookup, SalaryLookup};
use crate::salary::reports::DbSalaryLookup;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TechMap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Salary lookup backend: upstream service if configured, local reports otherwise
    let salary_backend: Arc<dyn SalaryLookup> = match &config.salary_api_url {
        Some(url) => Arc::new(HttpSalaryLookup::new(url.as_str())?),
        None => Arc::new(DbSalaryLookup::new(db.clone())),
    };
    info!(
        "Salary cache initialized (backend: {}, ttl: {}s, timeout: {}s)",
        salary_backend.backend(),
        config.salary_cache_ttl.as_secs(),
        config.salary_lookup_timeout.as_secs()
    );
    let salary_cache = SalaryCache::new(
        salary_backend,
        Arc::new(SystemClock),
        config.salary_cache_ttl,
        config.salary_lookup_timeout,
    );

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        salary_cache,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
