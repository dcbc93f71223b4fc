// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The matcher capability shared by all four algorithms.
//!
//! Each matcher is a per-pattern state machine: every call to
//! [`Matcher::advance`] performs at most one comparison and yields the
//! resulting event. Eager runs drain the machine; lazy step iteration pulls
//! from it on demand.

use std::sync::Arc;

use serde::Serialize;

use super::horspool::{HorspoolMatcher, ShiftTable};
use super::kmp::{KmpMatcher, PrefixTable};
use super::naive::NaiveMatcher;
use super::rabin_karp::{RabinKarpMatcher, RollingHashEntry};
use super::step::{Algorithm, MatchRecord, Step, StepDetail};
use crate::pattern::{Pattern, fold};

/// Something a matcher produced while scanning one pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// Horspool shift table, emitted once before scanning the pattern.
    ShiftTable(PatternTable<ShiftTable>),
    /// KMP prefix table, emitted once before scanning the pattern.
    PrefixTable(PatternTable<PrefixTable>),
    /// Rabin-Karp window examined.
    Window(RollingHashEntry),
    /// One comparison.
    Step(Step),
    /// A confirmed occurrence carrying the pattern's weight.
    Match { record: MatchRecord, weight: f64 },
}

/// An auxiliary table tagged with the pattern it was built for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternTable<T> {
    pub pattern: Arc<str>,
    pub table: T,
}

/// Per-pattern scanning state machine.
pub trait Matcher {
    /// Produce the next event, or `None` once this pattern is exhausted.
    ///
    /// `text` must be the same slice on every call.
    fn advance(&mut self, text: &[char]) -> Option<ScanEvent>;
}

/// Single dispatch point over the four matchers.
#[derive(Debug, Clone)]
pub enum Scanner {
    Naive(NaiveMatcher),
    Horspool(HorspoolMatcher),
    Kmp(KmpMatcher),
    RabinKarp(RabinKarpMatcher),
}

impl Scanner {
    pub fn new(algorithm: Algorithm, pattern: &Pattern, stop_on_first_match: bool) -> Self {
        match algorithm {
            Algorithm::Naive => Scanner::Naive(NaiveMatcher::new(pattern, stop_on_first_match)),
            Algorithm::Horspool => {
                Scanner::Horspool(HorspoolMatcher::new(pattern, stop_on_first_match))
            }
            Algorithm::Kmp => Scanner::Kmp(KmpMatcher::new(pattern, stop_on_first_match)),
            Algorithm::RabinKarp => {
                Scanner::RabinKarp(RabinKarpMatcher::new(pattern, stop_on_first_match))
            }
        }
    }
}

impl Matcher for Scanner {
    fn advance(&mut self, text: &[char]) -> Option<ScanEvent> {
        match self {
            Scanner::Naive(m) => m.advance(text),
            Scanner::Horspool(m) => m.advance(text),
            Scanner::Kmp(m) => m.advance(text),
            Scanner::RabinKarp(m) => m.advance(text),
        }
    }
}

/// Pattern prepared for comparison: literal and case-folded characters.
#[derive(Debug, Clone)]
pub(crate) struct Needle {
    pattern: Pattern,
    literal: Vec<char>,
    folded: Vec<char>,
}

impl Needle {
    pub(crate) fn new(pattern: &Pattern) -> Self {
        let literal: Vec<char> = pattern.text().chars().collect();
        let folded = literal.iter().copied().map(fold).collect();
        Self {
            pattern: pattern.clone(),
            literal,
            folded,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.folded.len()
    }

    pub(crate) fn text(&self) -> &Arc<str> {
        self.pattern.shared_text()
    }

    pub(crate) fn folded(&self) -> &[char] {
        &self.folded
    }

    pub(crate) fn literal_at(&self, j: usize) -> Option<char> {
        self.literal.get(j).copied()
    }

    /// Compare `pattern[j]` with `text[t]`. A position past either end is a mismatch.
    pub(crate) fn matches(&self, text: &[char], t: usize, j: usize) -> bool {
        match (text.get(t), self.folded.get(j)) {
            (Some(&c), Some(&p)) => fold(c) == p,
            _ => false,
        }
    }

    pub(crate) fn step(
        &self,
        algorithm: Algorithm,
        text_index: usize,
        pattern_index: usize,
        matched: bool,
        detail: Option<StepDetail>,
    ) -> ScanEvent {
        ScanEvent::Step(Step {
            text_index,
            pattern_index,
            pattern: Arc::clone(self.text()),
            matched,
            algorithm,
            detail,
        })
    }

    pub(crate) fn confirmed(&self, position: usize) -> ScanEvent {
        ScanEvent::Match {
            record: MatchRecord {
                pattern: Arc::clone(self.text()),
                position,
            },
            weight: self.pattern.weight(),
        }
    }
}
