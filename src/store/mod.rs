//! On-disk app ID records.
//!
//! Each resolved name persists as `<key>.steam` containing the decimal app
//! ID. Records are created or overwritten whole and never deleted here, so a
//! later run can trust whatever is already present.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};

use crate::steam::AppId;

mod key;
pub use key::sanitize_name;

/// Suffix appended to every record file.
pub const RECORD_SUFFIX: &str = ".steam";

/// Directory-backed store of sanitized-key -> app ID records.
#[derive(Debug, Clone)]
pub struct AppIdStore {
    dir: PathBuf,
}

impl AppIdStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Path of the record for `key`.
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}{RECORD_SUFFIX}"))
    }

    /// Whether a record for `key` is already present.
    pub fn exists(&self, key: &str) -> bool {
        self.record_path(key).is_file()
    }

    /// Read the app ID recorded for `key`.
    ///
    /// Parses the leading decimal integer of the record content; a missing
    /// file or anything that does not start with digits is an error, which
    /// cache-skip callers treat as a miss.
    pub fn read(&self, key: &str) -> Result<AppId> {
        let path = self.record_path(key);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read record {}", path.display()))?;
        parse_leading_id(&content)
            .with_context(|| format!("record {} does not hold an app id", path.display()))
    }

    /// Write (or overwrite) the record for `key`.
    pub fn write(&self, key: &str, id: AppId) -> Result<()> {
        let path = self.record_path(key);
        fs::write(&path, id.to_string())
            .with_context(|| format!("failed to write record {}", path.display()))
    }
}

/// Leading decimal integer of a record body.
fn parse_leading_id(content: &str) -> Result<AppId> {
    let trimmed = content.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    ensure!(!digits.is_empty(), "no leading integer");
    digits.parse::<AppId>().context("app id out of range")
}
