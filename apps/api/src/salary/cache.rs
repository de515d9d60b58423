//! API-backed salary cache.
//!
//! Wraps a `SalaryLookup` backend with a time-to-live cache keyed by
//! `lowercase(company)-lowercase(title)`. Empty answers are cached too, so an
//! unknown job costs one remote round-trip per TTL window. Backend failures
//! are not cached.
//!
//! Backend calls run in their own task. A caller that times out or is
//! dropped stops waiting, but the answer still lands in the cache.
//!
//! Concurrent misses for the same key are not deduplicated: each caller hits
//! the backend and the last write wins. Expired entries are evicted whenever
//! a new answer is stored.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::job::JobDescriptor;
use crate::salary::estimator::{estimate_salary, SalaryEstimate};
use crate::salary::lookup::{LookupError, RemoteSalary, SalaryLookup, SalaryQuery, SalarySource};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Time source for cache freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Option<RemoteSalary>,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.stored_at) < ttl
    }
}

/// Where a resolved estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateOrigin {
    Api,
    Heuristic,
}

#[derive(Clone)]
pub struct SalaryCache {
    backend: Arc<dyn SalaryLookup>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    lookup_timeout: Duration,
    entries: Arc<DashMap<String, CacheEntry>>,
}

impl SalaryCache {
    pub fn new(
        backend: Arc<dyn SalaryLookup>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            clock,
            ttl,
            lookup_timeout,
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Returns the cached value for `key` if it is younger than the TTL.
    /// The outer `Option` is freshness, the inner one is the cached answer.
    fn fresh_entry(&self, key: &str) -> Option<Option<RemoteSalary>> {
        let now = self.clock.now();
        let entry = self.entries.get(key)?;
        entry.is_fresh(now, self.ttl).then(|| entry.value.clone())
    }

    /// Evicts expired entries, then stores `value` under `key`.
    fn store(&self, key: String, value: Option<RemoteSalary>) {
        let now = self.clock.now();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.is_fresh(now, ttl));
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }

    /// Cache first, then the backend. `Ok(None)` means the backend had no
    /// usable figures.
    pub async fn lookup_remote(
        &self,
        job: &JobDescriptor,
    ) -> Result<Option<RemoteSalary>, LookupError> {
        let key = job.cache_key();

        if let Some(cached) = self.fresh_entry(&key) {
            debug!("Salary cache hit for '{key}'");
            return Ok(cached.filter(RemoteSalary::is_usable));
        }

        let query = SalaryQuery::from(job);
        let cache = self.clone();
        let task = tokio::spawn(async move {
            let result = cache.backend.lookup(&query).await;
            if let Ok(value) = &result {
                debug!(
                    "Salary lookup via {} for '{key}': {}",
                    cache.backend.backend(),
                    if value.is_some() { "found" } else { "no data" }
                );
                cache.store(key, value.clone());
            }
            result
        });

        let result = tokio::time::timeout(self.lookup_timeout, task)
            .await
            .map_err(|_| LookupError::Timeout(self.lookup_timeout))???;

        Ok(result.filter(RemoteSalary::is_usable))
    }

    /// Public estimate shape of `lookup_remote`.
    pub async fn lookup(&self, job: &JobDescriptor) -> Result<Option<SalaryEstimate>, LookupError> {
        Ok(self
            .lookup_remote(job)
            .await?
            .and_then(|salary| salary.to_estimate()))
    }

    async fn fetch_remote(&self, job: &JobDescriptor) -> Option<RemoteSalary> {
        match self.lookup_remote(job).await {
            Ok(salary) => salary,
            Err(e) => {
                warn!("Failed to fetch API salary for '{}': {e}", job.cache_key());
                None
            }
        }
    }

    /// Like `lookup`, but logs and swallows backend failures.
    pub async fn fetch_api_salary(&self, job: &JobDescriptor) -> Option<SalaryEstimate> {
        self.fetch_remote(job)
            .await
            .and_then(|salary| salary.to_estimate())
    }

    /// Cache-only check for crowd-sourced data. Never calls the backend and
    /// ignores freshness, so a stale entry counts until the next store evicts it.
    pub fn has_api_salary_data(&self, job: &JobDescriptor) -> bool {
        self.entries
            .get(&job.cache_key())
            .and_then(|entry| entry.value.as_ref().map(RemoteSalary::is_crowd_data))
            .unwrap_or(false)
    }

    /// API estimate when available, heuristic otherwise.
    ///
    /// Every `LookupError`, every empty answer and every answer the backend
    /// itself derived from the heuristic falls back to `estimate_salary`.
    pub async fn resolve_estimate(&self, job: &JobDescriptor) -> (SalaryEstimate, EstimateOrigin) {
        let api_estimate = self
            .fetch_remote(job)
            .await
            .filter(|salary| salary.source != SalarySource::Heuristic)
            .and_then(|salary| salary.to_estimate());

        match api_estimate {
            Some(estimate) => (estimate, EstimateOrigin::Api),
            None => (estimate_salary(job), EstimateOrigin::Heuristic),
        }
    }

    /// Number of cached keys, fresh or not yet evicted.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
