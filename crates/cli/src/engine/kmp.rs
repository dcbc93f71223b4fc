// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt matcher.
//!
//! The text cursor never moves backwards; on a mismatch the pattern cursor
//! falls back through the prefix table. The scan ends as soon as the text left
//! is shorter than the part of the pattern still to match, which also means a
//! pattern longer than the text costs no comparisons at all.

use serde::Serialize;

use super::scanner::{Matcher, Needle, PatternTable, ScanEvent};
use super::step::{Algorithm, StepDetail};
use crate::pattern::{Pattern, fold};

/// Failure function: `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrefixTable(Vec<usize>);

impl PrefixTable {
    /// Build the table over the case-folded pattern.
    pub fn build(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().map(fold).collect();
        Self::from_folded(&chars)
    }

    fn from_folded(p: &[char]) -> Self {
        let mut table = vec![0; p.len()];
        let mut len = 0;
        let mut i = 1;
        while i < p.len() {
            if p[i] == p[len] {
                len += 1;
                table[i] = len;
                i += 1;
            } else if len != 0 {
                len = table[len - 1];
            } else {
                table[i] = 0;
                i += 1;
            }
        }
        Self(table)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    fn fallback(&self, j: usize) -> usize {
        j.checked_sub(1)
            .and_then(|k| self.0.get(k))
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct KmpMatcher {
    needle: Needle,
    table: PrefixTable,
    stop_on_first_match: bool,
    i: usize,
    j: usize,
    table_emitted: bool,
    pending: Option<ScanEvent>,
    done: bool,
}

impl KmpMatcher {
    pub fn new(pattern: &Pattern, stop_on_first_match: bool) -> Self {
        let needle = Needle::new(pattern);
        let table = PrefixTable::from_folded(needle.folded());
        Self {
            needle,
            table,
            stop_on_first_match,
            i: 0,
            j: 0,
            table_emitted: false,
            pending: None,
            done: false,
        }
    }

    pub fn table(&self) -> &PrefixTable {
        &self.table
    }
}

impl Matcher for KmpMatcher {
    fn advance(&mut self, text: &[char]) -> Option<ScanEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        if !self.table_emitted {
            self.table_emitted = true;
            return Some(ScanEvent::PrefixTable(PatternTable {
                pattern: self.needle.text().clone(),
                table: self.table.clone(),
            }));
        }
        let n = text.len();
        let m = self.needle.len();
        let (i, j) = (self.i, self.j);
        if self.done || m == 0 || i >= n || n - i < m - j {
            self.done = true;
            return None;
        }

        let matched = self.needle.matches(text, i, j);
        let detail = match (text.get(i), self.needle.literal_at(j)) {
            (Some(&text_char), Some(pattern_char)) => Some(StepDetail::Characters {
                text_char,
                pattern_char,
            }),
            _ => None,
        };
        let step = self.needle.step(Algorithm::Kmp, i - j, j, matched, detail);

        if matched {
            self.i += 1;
            self.j += 1;
            if self.j == m {
                self.pending = Some(self.needle.confirmed(self.i - self.j));
                if self.stop_on_first_match {
                    self.done = true;
                } else {
                    self.j = self.table.fallback(self.j);
                }
            }
        } else if j != 0 {
            self.j = self.table.fallback(j);
        } else {
            self.i += 1;
        }

        Some(step)
    }
}

#[cfg(test)]
#[path = "kmp_tests.rs"]
mod tests;
