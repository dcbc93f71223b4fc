// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded comparison steps and confirmed matches.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Substring-search algorithm driving a run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Brute force: every alignment, left to right.
    #[default]
    Naive,
    /// Boyer-Moore-Horspool: right to left with a bad-character shift table.
    Horspool,
    /// Knuth-Morris-Pratt: prefix-table driven, never re-reads text.
    Kmp,
    /// Rabin-Karp: rolling hash with character verification on hits.
    RabinKarp,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Horspool,
        Algorithm::Kmp,
        Algorithm::RabinKarp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Horspool => "horspool",
            Algorithm::Kmp => "kmp",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One character (or hash) comparison.
///
/// `text_index` is where the pattern is aligned in the text, not necessarily
/// the compared character; that one sits at [`Step::text_position`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub text_index: usize,
    pub pattern_index: usize,
    pub pattern: Arc<str>,
    pub matched: bool,
    pub algorithm: Algorithm,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub detail: Option<StepDetail>,
}

/// Algorithm-specific step payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepDetail {
    /// KMP: the literal characters compared.
    Characters { text_char: char, pattern_char: char },
    /// Rabin-Karp: pattern hash and current window hash.
    Hashes { pattern_hash: u32, window_hash: u32 },
}

impl Step {
    /// Index of the text character this step compared.
    pub fn text_position(&self) -> usize {
        self.text_index + self.pattern_index
    }
}

/// A confirmed occurrence of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub pattern: Arc<str>,
    pub position: usize,
}
