//! Filesystem-safe keys derived from display names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal runs of spaces and underscores, collapsed to one underscore.
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[_\s]+").expect("static pattern");
}

/// Derive the storage key for a display name.
///
/// Every character outside ASCII alphanumerics, space, hyphen and underscore
/// is substituted with an underscore, separator runs collapse to a single
/// underscore, and leading/trailing underscores are trimmed. Total and
/// deterministic: the same name always maps to the same key.
pub fn sanitize_name(name: &str) -> String {
    let substituted: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let collapsed = SEPARATOR_RUN.replace_all(&substituted, "_");
    collapsed.trim_matches('_').to_string()
}
