//! # Steamfetch - Parallel Steam App ID Resolution
//!
//! Steamfetch takes a plain-text list of game names, resolves each one
//! against the Steam Store search API, and writes one `.steam` record per
//! name containing the matched app ID.
//!
//! ## Features
//!
//! - **Bounded parallelism**: a fixed worker pool keeps total latency low
//!   without flooding the API
//! - **Idempotent output**: re-runs with `--skip-existing` read records that
//!   are already on disk instead of re-querying
//! - **Non-fatal failures**: a name that cannot be resolved is reported in
//!   the summary and never aborts the rest of the batch
//!
//! ## Quick Start
//!
//! ```bash
//! # Resolve every name in games.txt into output/
//! steamfetch games.txt
//!
//! # More workers, reuse prior records
//! steamfetch --workers 16 --skip-existing games.txt
//! ```

pub mod cli;
pub mod config;
pub mod fetch;
pub mod parallel;
pub mod steam;
pub mod store;

#[cfg(test)]
pub mod test_support;

pub use cli::{Cli, Output};
pub use config::FetchConfig;

/// Result type alias for steamfetch operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
