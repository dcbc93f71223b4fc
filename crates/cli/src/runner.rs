// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel runner for comparing algorithms.
//!
//! Each algorithm gets its own independent, single-threaded run; rayon only
//! spreads the runs across threads. No state is shared between runs.

use rayon::prelude::*;

use crate::engine::{self, Algorithm, RunRequest, RunResult, ScanPolicy};
use crate::pattern::PatternSet;

/// Run every listed algorithm over the same input.
///
/// Results come back in the order of `algorithms`.
pub fn run_all(
    text: &str,
    patterns: &PatternSet,
    policy: ScanPolicy,
    algorithms: &[Algorithm],
) -> Vec<RunResult> {
    algorithms
        .par_iter()
        .map(|&algorithm| {
            let request = RunRequest::new(text, patterns, algorithm).with_policy(policy);
            engine::run(&request)
        })
        .collect()
}

/// Whether every run confirmed the same matches.
pub fn agree(results: &[RunResult]) -> bool {
    results
        .windows(2)
        .all(|pair| pair[0].matches == pair[1].matches)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
