// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Brute-force matcher.
//!
//! Tries every alignment `0..=n-m`, comparing left to right and abandoning the
//! alignment on the first mismatch. Worst case O(n·m) per pattern.

use super::scanner::{Matcher, Needle, ScanEvent};
use super::step::Algorithm;
use crate::pattern::Pattern;

#[derive(Debug, Clone)]
pub struct NaiveMatcher {
    needle: Needle,
    stop_on_first_match: bool,
    start: usize,
    offset: usize,
    pending: Option<ScanEvent>,
    done: bool,
}

impl NaiveMatcher {
    pub fn new(pattern: &Pattern, stop_on_first_match: bool) -> Self {
        Self {
            needle: Needle::new(pattern),
            stop_on_first_match,
            start: 0,
            offset: 0,
            pending: None,
            done: false,
        }
    }
}

impl Matcher for NaiveMatcher {
    fn advance(&mut self, text: &[char]) -> Option<ScanEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
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
            .step(Algorithm::Naive, self.start, j, matched, None);

        if !matched {
            self.start += 1;
            self.offset = 0;
        } else if j + 1 == m {
            self.pending = Some(self.needle.confirmed(self.start));
            if self.stop_on_first_match {
                self.done = true;
            } else {
                self.start += 1;
                self.offset = 0;
            }
        } else {
            self.offset += 1;
        }

        Some(step)
    }
}

#[cfg(test)]
#[path = "naive_tests.rs"]
mod tests;
