// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::{FormatOptions, is_spam, timestamp};
use crate::engine::{Algorithm, AuxiliaryTables, MatchRecord, RunResult, Step};
use crate::pattern::PatternSet;

/// Single scan document.
#[derive(Debug, Serialize)]
struct ScanOutput<'a> {
    timestamp: String,
    algorithm: Algorithm,
    score: f64,
    comparisons: usize,
    matches: &'a [MatchRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    spam: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [Step]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auxiliary: Option<&'a AuxiliaryTables>,
}

/// One algorithm's line in a comparison.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    algorithm: Algorithm,
    score: f64,
    comparisons: usize,
    matches: &'a [MatchRecord],
}

#[derive(Debug, Serialize)]
struct CompareOutput<'a> {
    timestamp: String,
    runs: Vec<RunSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct PatternsOutput<'a> {
    patterns: &'a PatternSet,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Write one scan result.
    pub fn write_scan(&mut self, result: &RunResult) -> std::io::Result<()> {
        let output = ScanOutput {
            timestamp: timestamp(),
            algorithm: result.algorithm,
            score: result.score,
            comparisons: result.comparisons,
            matches: &result.matches,
            spam: self
                .options
                .threshold
                .map(|_| is_spam(result.score, self.options.threshold)),
            steps: self.options.steps.then_some(result.steps.as_slice()),
            auxiliary: self.options.tables.then_some(&result.auxiliary),
        };
        self.emit(&output)
    }

    /// Write a side-by-side comparison of several runs.
    pub fn write_compare(&mut self, results: &[RunResult]) -> std::io::Result<()> {
        let output = CompareOutput {
            timestamp: timestamp(),
            runs: results
                .iter()
                .map(|r| RunSummary {
                    algorithm: r.algorithm,
                    score: r.score,
                    comparisons: r.comparisons,
                    matches: &r.matches,
                })
                .collect(),
        };
        self.emit(&output)
    }

    /// Write the effective pattern set.
    pub fn write_patterns(&mut self, patterns: &PatternSet) -> std::io::Result<()> {
        self.emit(&PatternsOutput { patterns })
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = if self.options.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
        .map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
