// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Step log and score accumulation shared by every algorithm.

use super::step::{MatchRecord, Step};

/// Append-only, ordered log of comparison steps.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
}

impl TraceRecorder {
    pub fn append(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// Weighted score, comparison count, and confirmed matches.
#[derive(Debug, Default)]
pub struct Scorer {
    score: f64,
    comparisons: usize,
    matches: Vec<MatchRecord>,
}

impl Scorer {
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Record a confirmed occurrence and add its pattern's weight.
    pub fn confirm(&mut self, record: MatchRecord, weight: f64) {
        self.score += weight;
        self.matches.push(record);
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn into_parts(self) -> (f64, usize, Vec<MatchRecord>) {
        (self.score, self.comparisons, self.matches)
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
