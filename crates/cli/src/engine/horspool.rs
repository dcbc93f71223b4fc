// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boyer-Moore-Horspool matcher.
//!
//! Compares right to left. On a mismatch the alignment jumps by the shift of
//! the text character under the pattern's last position. After a full match
//! that does not stop the scan, the alignment advances by exactly one so that
//! overlapping occurrences are never skipped.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scanner::{Matcher, Needle, PatternTable, ScanEvent};
use super::step::Algorithm;
use crate::pattern::{Pattern, fold};

/// Bad-character shift table over case-folded characters.
///
/// Characters absent from the table shift by the full pattern length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShiftTable(BTreeMap<char, usize>);

impl ShiftTable {
    /// Build the table for `pattern`.
    ///
    /// For each index `i` in `0..m-1`, `shift[pattern[i]] = m-1-i`; later
    /// occurrences overwrite earlier ones. The last character is excluded.
    pub fn build(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().map(fold).collect();
        Self::from_folded(&chars)
    }

    fn from_folded(chars: &[char]) -> Self {
        let m = chars.len();
        let mut table = BTreeMap::new();
        for (i, &c) in chars.iter().enumerate().take(m.saturating_sub(1)) {
            table.insert(c, m - 1 - i);
        }
        Self(table)
    }

    pub fn get(&self, c: char) -> Option<usize> {
        self.0.get(&fold(c)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(&c, &shift)| (c, shift))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct HorspoolMatcher {
    needle: Needle,
    table: ShiftTable,
    stop_on_first_match: bool,
    start: usize,
    offset: usize,
    table_emitted: bool,
    pending: Option<ScanEvent>,
    done: bool,
}

impl HorspoolMatcher {
    pub fn new(pattern: &Pattern, stop_on_first_match: bool) -> Self {
        let needle = Needle::new(pattern);
        let table = ShiftTable::from_folded(needle.folded());
        let offset = needle.len().saturating_sub(1);
        Self {
            needle,
            table,
            stop_on_first_match,
            start: 0,
            offset,
            table_emitted: false,
            pending: None,
            done: false,
        }
    }

    pub fn table(&self) -> &ShiftTable {
        &self.table
    }
}

impl Matcher for HorspoolMatcher {
    fn advance(&mut self, text: &[char]) -> Option<ScanEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        if !self.table_emitted {
            self.table_emitted = true;
            return Some(ScanEvent::ShiftTable(PatternTable {
                pattern: self.needle.text().clone(),
                table: self.table.clone(),
            }));
        }
        let m = self.needle.len();
        if self.done || m == 0 || self.start + m > text.len() {
            self.done = true;
            return None;
        }

        let j = self.offset;
        let matched = self.needle.matches(text, self.start + j, j);
        let step = self
            .needle
            .step(Algorithm::Horspool, self.start, j, matched, None);

        if matched {
            if j == 0 {
                self.pending = Some(self.needle.confirmed(self.start));
                if self.stop_on_first_match {
                    self.done = true;
                } else {
                    self.start += 1;
                    self.offset = m - 1;
                }
            } else {
                self.offset = j - 1;
            }
        } else {
            let shift = text
                .get(self.start + m - 1)
                .and_then(|&c| self.table.get(c))
                .unwrap_or(m);
            self.start += shift;
            self.offset = m - 1;
        }

        Some(step)
    }
}

#[cfg(test)]
#[path = "horspool_tests.rs"]
mod tests;
