//! Output formatting for scan results.

pub mod json;
pub mod text;

use chrono::Utc;

/// Output formatting options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Include every comparison step.
    pub steps: bool,
    /// Include the algorithm's auxiliary tables.
    pub tables: bool,
    /// Single-line JSON.
    pub compact: bool,
    /// Score at or above which the text counts as spam.
    pub threshold: Option<f64>,
}

/// Current time as an RFC 3339 timestamp (seconds precision, UTC).
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Whether a score reaches the configured threshold.
pub fn is_spam(score: f64, threshold: Option<f64>) -> bool {
    threshold.is_some_and(|t| score >= t)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
