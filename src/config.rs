//! Run parameters for a fetch batch.

use std::path::PathBuf;

use crate::steam::STORE_SEARCH_ENDPOINT;

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 8;

/// Default output directory for record files.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything a batch run needs to know, resolved from the command line.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Directory receiving one `.steam` record per resolved name
    pub output_dir: PathBuf,

    /// Number of concurrent workers (clamped to the batch size at run time)
    pub workers: usize,

    /// Read existing records instead of re-querying the API
    pub skip_existing: bool,

    /// Surface per-request error detail on failures
    pub verbose: bool,

    /// Storesearch endpoint to query
    pub api_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workers: DEFAULT_WORKERS,
            skip_existing: false,
            verbose: false,
            api_url: STORE_SEARCH_ENDPOINT.to_string(),
        }
    }
}
