// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Weighted keyword patterns and the candidate pre-filter.
//!
//! Matching is case-insensitive through simple ASCII lowercase folding;
//! every matcher, table builder, and the pre-filter go through [`fold`].

pub mod filter;
pub mod set;

pub use filter::candidates;
pub use set::{DEFAULT_PATTERNS, Pattern, PatternError, PatternSet};

/// Fold a character for case-insensitive comparison.
#[inline]
pub fn fold(c: char) -> char {
    c.to_ascii_lowercase()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
