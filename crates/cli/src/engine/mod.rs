// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-algorithm keyword matching engine.
//!
//! A run takes an immutable [`RunRequest`] and scans every candidate pattern
//! with the selected algorithm, recording each comparison as a [`Step`]:
//! - [`run`] materialises the whole trace into a [`RunResult`]
//! - [`steps`] yields the same steps lazily, one comparison at a time
//!
//! The engine has no error path. Degenerate inputs (empty text, patterns
//! longer than the text, an empty candidate list) produce empty results.

pub mod horspool;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
pub mod scanner;
pub mod step;
pub mod trace;

use serde::Serialize;

pub use horspool::ShiftTable;
pub use kmp::PrefixTable;
pub use rabin_karp::RollingHashEntry;
pub use scanner::{Matcher, PatternTable, ScanEvent, Scanner};
pub use step::{Algorithm, MatchRecord, Step, StepDetail};
pub use trace::{Scorer, TraceRecorder};

use crate::pattern::{Pattern, PatternSet, candidates};

/// Policy flags for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanPolicy {
    /// Stop scanning a pattern after its first confirmed occurrence.
    pub stop_on_first_match: bool,
    /// Scan every pattern; when off, only patterns the text contains are scanned.
    pub use_all_patterns: bool,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            stop_on_first_match: true,
            use_all_patterns: true,
        }
    }
}

/// Everything a run depends on.
#[derive(Debug, Clone, Copy)]
pub struct RunRequest<'a> {
    pub text: &'a str,
    pub patterns: &'a PatternSet,
    pub algorithm: Algorithm,
    pub policy: ScanPolicy,
}

impl<'a> RunRequest<'a> {
    /// Request with the default policy.
    pub fn new(text: &'a str, patterns: &'a PatternSet, algorithm: Algorithm) -> Self {
        Self {
            text,
            patterns,
            algorithm,
            policy: ScanPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Algorithm-specific tables collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "tables", rename_all = "snake_case")]
pub enum AuxiliaryTables {
    /// Naive keeps no tables.
    #[default]
    None,
    /// Horspool: one shift table per scanned pattern.
    ShiftTables(Vec<PatternTable<ShiftTable>>),
    /// KMP: one prefix table per scanned pattern.
    PrefixTables(Vec<PatternTable<PrefixTable>>),
    /// Rabin-Karp: every window examined, across all patterns.
    RollingHashes(Vec<RollingHashEntry>),
}

impl AuxiliaryTables {
    fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Naive => AuxiliaryTables::None,
            Algorithm::Horspool => AuxiliaryTables::ShiftTables(Vec::new()),
            Algorithm::Kmp => AuxiliaryTables::PrefixTables(Vec::new()),
            Algorithm::RabinKarp => AuxiliaryTables::RollingHashes(Vec::new()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AuxiliaryTables::None)
    }

    pub fn shift_tables(&self) -> &[PatternTable<ShiftTable>] {
        match self {
            AuxiliaryTables::ShiftTables(tables) => tables,
            _ => &[],
        }
    }

    pub fn prefix_tables(&self) -> &[PatternTable<PrefixTable>] {
        match self {
            AuxiliaryTables::PrefixTables(tables) => tables,
            _ => &[],
        }
    }

    pub fn rolling_hashes(&self) -> &[RollingHashEntry] {
        match self {
            AuxiliaryTables::RollingHashes(entries) => entries,
            _ => &[],
        }
    }
}

/// Immutable outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub steps: Vec<Step>,
    /// Sum of the weights of confirmed matches (not rounded).
    pub score: f64,
    /// Comparisons performed; always equal to `steps.len()`.
    pub comparisons: usize,
    pub matches: Vec<MatchRecord>,
    pub auxiliary: AuxiliaryTables,
}

impl RunResult {
    /// Whether the run confirmed anything.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Run the engine to completion.
pub fn run(request: &RunRequest<'_>) -> RunResult {
    tracing::debug!(
        "running {} over {} chars ({} patterns)",
        request.algorithm,
        request.text.len(),
        request.patterns.len()
    );

    let mut trace = TraceRecorder::default();
    let mut scorer = Scorer::default();
    let mut auxiliary = AuxiliaryTables::for_algorithm(request.algorithm);

    for event in events(request) {
        match (event, &mut auxiliary) {
            (ScanEvent::Step(step), _) => {
                scorer.count_comparison();
                trace.append(step);
            }
            (ScanEvent::Match { record, weight }, _) => {
                tracing::debug!("matched `{}` at {}", record.pattern, record.position);
                scorer.confirm(record, weight);
            }
            (ScanEvent::ShiftTable(table), AuxiliaryTables::ShiftTables(tables)) => {
                tables.push(table)
            }
            (ScanEvent::PrefixTable(table), AuxiliaryTables::PrefixTables(tables)) => {
                tables.push(table)
            }
            (ScanEvent::Window(entry), AuxiliaryTables::RollingHashes(entries)) => {
                entries.push(entry)
            }
            _ => {}
        }
    }

    let steps = trace.into_steps();
    let (score, comparisons, matches) = scorer.into_parts();
    tracing::debug!(
        "{} finished: score {}, {} comparisons, {} matches",
        request.algorithm,
        score,
        comparisons,
        matches.len()
    );

    RunResult {
        algorithm: request.algorithm,
        steps,
        score,
        comparisons,
        matches,
        auxiliary,
    }
}

/// Lazily iterate every event of a run.
///
/// Each call starts a fresh scan; dropping the iterator abandons the run.
pub fn events<'a>(request: &RunRequest<'a>) -> Events<'a> {
    let candidates = candidates(
        request.patterns,
        request.text,
        request.policy.use_all_patterns,
    );
    Events {
        text: request.text.chars().collect(),
        candidates: candidates.into_iter(),
        algorithm: request.algorithm,
        stop_on_first_match: request.policy.stop_on_first_match,
        current: None,
    }
}

/// Lazily iterate the comparison steps of a run.
///
/// Yields exactly the steps [`run`] would record, in the same order.
pub fn steps<'a>(request: &RunRequest<'a>) -> Steps<'a> {
    Steps {
        events: events(request),
    }
}

/// Scan a single pattern to completion and return its steps and matches.
pub fn scan(
    algorithm: Algorithm,
    text: &str,
    pattern: &Pattern,
    stop_on_first_match: bool,
) -> (Vec<Step>, Vec<MatchRecord>) {
    let text: Vec<char> = text.chars().collect();
    let mut scanner = Scanner::new(algorithm, pattern, stop_on_first_match);
    let mut steps = Vec::new();
    let mut matches = Vec::new();
    while let Some(event) = scanner.advance(&text) {
        match event {
            ScanEvent::Step(step) => steps.push(step),
            ScanEvent::Match { record, .. } => matches.push(record),
            _ => {}
        }
    }
    (steps, matches)
}

/// Event iterator over all candidate patterns of a run.
#[derive(Debug, Clone)]
pub struct Events<'a> {
    text: Vec<char>,
    candidates: std::vec::IntoIter<&'a Pattern>,
    algorithm: Algorithm,
    stop_on_first_match: bool,
    current: Option<Scanner>,
}

impl Iterator for Events<'_> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            if let Some(scanner) = self.current.as_mut() {
                match scanner.advance(&self.text) {
                    Some(event) => return Some(event),
                    None => self.current = None,
                }
            }
            let pattern = self.candidates.next()?;
            tracing::trace!("scanning `{}` with {}", pattern.text(), self.algorithm);
            self.current = Some(Scanner::new(
                self.algorithm,
                pattern,
                self.stop_on_first_match,
            ));
        }
    }
}

/// Step iterator over all candidate patterns of a run.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    events: Events<'a>,
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.events.by_ref().find_map(|event| match event {
            ScanEvent::Step(step) => Some(step),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
