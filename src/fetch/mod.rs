//! The per-name resolution pipeline and batch aggregation.
//!
//! One name flows through [`process_query`]: sanitize, consult the record
//! store (cache-skip path), resolve over the network, persist. The worker
//! pool drives many of these at once and [`BatchSummary`] folds the outcomes
//! on the single consumer side, so no tally needs synchronization.

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::parallel::WorkerPool;
use crate::steam::{AppId, ResolveError, SteamClient};
use crate::store::{AppIdStore, sanitize_name};

/// Why a single name failed to produce a persisted record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Resolution succeeded but the record could not be written. A lookup
    /// that cannot be persisted is not reported as a success.
    #[error("failed to persist app id: {0}")]
    Persist(anyhow::Error),
}

/// Outcome of processing one name, moved once to the aggregator.
#[derive(Debug)]
pub struct QueryOutcome {
    pub name: String,
    pub app_id: Option<AppId>,
    pub error: Option<FetchError>,
}

impl QueryOutcome {
    fn success(name: String, app_id: AppId) -> Self {
        Self {
            name,
            app_id: Some(app_id),
            error: None,
        }
    }

    fn failure(name: String, error: FetchError) -> Self {
        Self {
            name,
            app_id: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Resolve one name and persist its record.
///
/// With `skip_existing`, a readable existing record short-circuits the
/// network lookup; an unreadable or corrupt one falls through to a fresh
/// resolution.
pub fn process_query(
    client: &SteamClient,
    store: &AppIdStore,
    name: &str,
    skip_existing: bool,
) -> QueryOutcome {
    let key = sanitize_name(name);

    if skip_existing && store.exists(&key) {
        match store.read(&key) {
            Ok(id) => {
                debug!(name, id, "record already present, skipping lookup");
                return QueryOutcome::success(name.to_string(), id);
            }
            Err(err) => {
                warn!(name, error = %err, "existing record unreadable, re-resolving");
            }
        }
    }

    let id = match client.resolve(name) {
        Ok(id) => id,
        Err(err) => return QueryOutcome::failure(name.to_string(), err.into()),
    };

    if let Err(err) = store.write(&key, id) {
        return QueryOutcome::failure(name.to_string(), FetchError::Persist(err));
    }

    QueryOutcome::success(name.to_string(), id)
}

/// Running tally over outcomes, folded by the single consumer.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Failed names, in completion order.
    pub failed_names: Vec<String>,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &QueryOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
            self.failed_names.push(outcome.name.clone());
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Drive a full batch of names through the worker pool.
///
/// `on_outcome` observes every outcome in completion order (progress
/// display); the returned summary has consumed exactly one outcome per
/// name. Per-name failures are folded into the summary, never returned as
/// `Err`.
pub fn run_batch<F>(
    names: Vec<String>,
    config: &FetchConfig,
    store: &AppIdStore,
    mut on_outcome: F,
) -> Result<BatchSummary>
where
    F: FnMut(&QueryOutcome),
{
    let client =
        SteamClient::with_endpoint(&config.api_url).context("failed to build HTTP client")?;
    let pool = WorkerPool::new(config.workers);
    let skip_existing = config.skip_existing;

    let mut summary = BatchSummary::default();
    pool.run(
        names,
        |name| process_query(&client, store, &name, skip_existing),
        |outcome| {
            on_outcome(&outcome);
            summary.record(&outcome);
        },
    )?;

    Ok(summary)
}
