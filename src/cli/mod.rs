//! Command-line interface for steamfetch.
//!
//! Parses flags with clap and drives the fetch pipeline: read the name
//! list, open the record store, run the worker pool, print per-name
//! progress and the final summary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

mod output;

pub use output::Output;

use crate::config::{DEFAULT_OUTPUT_DIR, FetchConfig};
use crate::fetch;
use crate::steam::STORE_SEARCH_ENDPOINT;
use crate::store::AppIdStore;

/// Resolve Steam app IDs for a list of game names
#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Input file with one game name per line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Output directory for .steam files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Number of concurrent workers
    #[arg(short, long, value_name = "N", default_value_t = 8,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: u64,

    /// Skip games that already have .steam files
    #[arg(long)]
    pub skip_existing: bool,

    /// Show detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Storesearch endpoint to query
    #[arg(long, env = "STEAMFETCH_API_URL", default_value = STORE_SEARCH_ENDPOINT, hide = true)]
    pub api_url: String,
}

impl Cli {
    /// Execute the fetch run.
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose);
        let output = Output::new(self.verbose);

        if !self.input.exists() {
            bail!("input file '{}' not found", self.input.display());
        }
        let names = read_name_list(&self.input)?;

        let config = FetchConfig {
            output_dir: self.output,
            workers: self.workers as usize,
            skip_existing: self.skip_existing,
            verbose: self.verbose,
            api_url: self.api_url,
        };

        // Fatal preconditions end here; everything after this point fails
        // per-name only.
        let store = AppIdStore::open(&config.output_dir)?;

        let total = names.len();
        output.info(&format!("Processing {total} game(s)..."));
        output.verbose(&format!(
            "Output directory: {}",
            config.output_dir.display()
        ));
        output.verbose(&format!("Workers: {}", config.workers));
        output.verbose(&format!("Skip existing: {}", config.skip_existing));

        let mut done = 0usize;
        let summary = fetch::run_batch(names, &config, &store, |outcome| {
            done += 1;
            output.result_line(done, total, outcome);
        })?;

        output.summary(&summary, &config.output_dir);
        Ok(())
    }
}

/// Read the query list: one trimmed name per line, blank lines dropped.
fn read_name_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    let names: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        bail!("no game names found in {}", path.display());
    }
    Ok(names)
}

fn setup_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("steamfetch=debug,reqwest=warn")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn name_list_trims_and_drops_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  Portal  \n\n\t\nHalf-Life 2\n").unwrap();

        let names = read_name_list(file.path()).unwrap();
        assert_eq!(names, vec!["Portal", "Half-Life 2"]);
    }

    #[test]
    fn name_list_preserves_order_and_duplicates() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Portal\nPortal\nDota 2\n").unwrap();

        let names = read_name_list(file.path()).unwrap();
        assert_eq!(names, vec!["Portal", "Portal", "Dota 2"]);
    }

    #[test]
    fn empty_name_list_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\n   \n\n").unwrap();
        assert!(read_name_list(file.path()).is_err());
    }
}
