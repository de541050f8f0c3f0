//! Console output for the fetch run.
//!
//! Keeps progress lines and the end-of-run summary consistent, in the style
//! of lint-staged and other modern CLI tools.

use std::path::Path;

use console::style;

use crate::fetch::{BatchSummary, QueryOutcome};

const SUMMARY_SEPARATOR_WIDTH: usize = 50;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print one completed item as `[done/total] name ... status`.
    ///
    /// Failures show the underlying error in verbose mode and a generic
    /// `not found` otherwise.
    pub fn result_line(&self, done: usize, total: usize, outcome: &QueryOutcome) {
        let position = style(format!("[{done}/{total}]")).dim();
        if let Some(id) = outcome.app_id {
            println!(
                "{position} {} ... {} {}",
                outcome.name,
                style("✓").green(),
                style(format!("found (app id {id})")).green()
            );
        } else {
            let detail = outcome
                .error
                .as_ref()
                .filter(|_| self.verbose)
                .map(|err| err.to_string())
                .unwrap_or_else(|| "not found".to_string());
            println!(
                "{position} {} ... {} {}",
                outcome.name,
                style("✗").red(),
                style(detail).red()
            );
        }
    }

    /// Print the end-of-run summary block.
    pub fn summary(&self, summary: &BatchSummary, output_dir: &Path) {
        println!("\n{}", style("=".repeat(SUMMARY_SEPARATOR_WIDTH)).dim());
        println!("{}", style("Summary:").bold());
        println!("  Success: {}", style(summary.succeeded).green());
        println!("  Failed:  {}", style(summary.failed).red());
        println!("  Output:  {}/", output_dir.display());

        if !summary.failed_names.is_empty() {
            println!("\n{}", style("Failed games:").bold());
            for name in &summary.failed_names {
                println!("  - {name}");
            }
        }

        println!(
            "\nDone! Check the '{}/' folder for .steam files.",
            output_dir.display()
        );
    }
}
