// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate pre-filter.
//!
//! A cheap containment check that narrows the pattern set before the
//! instrumented matcher runs. It is not instrumented: patterns it drops
//! simply produce no steps.

use memchr::memmem;

use super::set::{Pattern, PatternSet};

/// Select the patterns to scan.
///
/// With `use_all_patterns` the full set is returned unchanged. Otherwise only
/// patterns whose lowercase text occurs literally in the lowercase text are
/// kept, in set order.
pub fn candidates<'a>(set: &'a PatternSet, text: &str, use_all_patterns: bool) -> Vec<&'a Pattern> {
    if use_all_patterns {
        return set.iter().collect();
    }

    let haystack = text.to_ascii_lowercase();
    let kept: Vec<&Pattern> = set
        .iter()
        .filter(|pattern| {
            let needle = pattern.text().to_ascii_lowercase();
            memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
        })
        .collect();

    tracing::debug!(
        "prefilter kept {} of {} patterns",
        kept.len(),
        set.len()
    );
    kept
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
