// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rabin-Karp matcher.
//!
//! Polynomial rolling hash with base 256 and modulus 101. The modulus is kept
//! small on purpose: collisions are frequent and every hash hit is verified
//! character by character before it counts.

use std::sync::Arc;

use serde::Serialize;

use super::scanner::{Matcher, Needle, ScanEvent};
use super::step::{Algorithm, StepDetail};
use crate::pattern::{Pattern, fold};

/// Hash base.
pub const BASE: i64 = 256;
/// Hash modulus.
pub const MODULUS: i64 = 101;

/// One examined window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollingHashEntry {
    pub pattern: Arc<str>,
    pub position: usize,
    pub window_text: String,
    pub window_hash: u32,
}

/// Polynomial hash of case-folded characters.
pub fn hash(chars: &[char]) -> i64 {
    chars
        .iter()
        .fold(0, |acc, &c| (BASE * acc + code(c)) % MODULUS)
}

/// `BASE^(m-1) mod MODULUS`, the weight of a window's leading character.
pub fn leading_weight(m: usize) -> i64 {
    (1..m).fold(1, |h, _| (h * BASE) % MODULUS)
}

/// Slide a window hash one character to the right.
pub fn roll(hash: i64, outgoing: char, incoming: char, leading_weight: i64) -> i64 {
    let next = (BASE * (hash - code(outgoing) * leading_weight) + code(incoming)) % MODULUS;
    if next < 0 { next + MODULUS } else { next }
}

fn code(c: char) -> i64 {
    i64::from(u32::from(fold(c)))
}

#[derive(Debug, Clone)]
pub struct RabinKarpMatcher {
    needle: Needle,
    stop_on_first_match: bool,
    pattern_hash: i64,
    leading_weight: i64,
    window_hash: Option<i64>,
    start: usize,
    verifying: Option<usize>,
    pending: Option<ScanEvent>,
    done: bool,
}

impl RabinKarpMatcher {
    pub fn new(pattern: &Pattern, stop_on_first_match: bool) -> Self {
        let needle = Needle::new(pattern);
        let pattern_hash = hash(needle.folded());
        let leading_weight = leading_weight(needle.len());
        Self {
            needle,
            stop_on_first_match,
            pattern_hash,
            leading_weight,
            window_hash: None,
            start: 0,
            verifying: None,
            pending: None,
            done: false,
        }
    }

    fn step(&self, pattern_index: usize, matched: bool, window_hash: i64) -> ScanEvent {
        let detail = StepDetail::Hashes {
            pattern_hash: self.pattern_hash as u32,
            window_hash: window_hash as u32,
        };
        self.needle.step(
            Algorithm::RabinKarp,
            self.start,
            pattern_index,
            matched,
            Some(detail),
        )
    }

    /// Move to the next window, rolling the hash when one exists.
    fn slide(&mut self, text: &[char]) {
        let m = self.needle.len();
        if let (Some(hash), Some(&outgoing), Some(&incoming)) = (
            self.window_hash,
            text.get(self.start),
            text.get(self.start + m),
        ) {
            self.window_hash = Some(roll(hash, outgoing, incoming, self.leading_weight));
        }
        self.start += 1;
    }
}

impl Matcher for RabinKarpMatcher {
    fn advance(&mut self, text: &[char]) -> Option<ScanEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        let m = self.needle.len();
        if self.done || m == 0 || self.start + m > text.len() {
            self.done = true;
            return None;
        }
        let window_hash = *self
            .window_hash
            .get_or_insert_with(|| hash(&text[..m]));

        if let Some(j) = self.verifying {
            let matched = self.needle.matches(text, self.start + j, j);
            let step = self.step(j, matched, window_hash);
            if !matched {
                self.verifying = None;
                self.slide(text);
            } else if j + 1 == m {
                self.verifying = None;
                self.pending = Some(self.needle.confirmed(self.start));
                if self.stop_on_first_match {
                    self.done = true;
                } else {
                    self.slide(text);
                }
            } else {
                self.verifying = Some(j + 1);
            }
            return Some(step);
        }

        let entry = RollingHashEntry {
            pattern: self.needle.text().clone(),
            position: self.start,
            window_text: text[self.start..self.start + m].iter().collect(),
            window_hash: window_hash as u32,
        };
        let hit = window_hash == self.pattern_hash;
        self.pending = Some(self.step(0, hit, window_hash));
        if hit {
            self.verifying = Some(0);
        } else {
            self.slide(text);
        }
        Some(ScanEvent::Window(entry))
    }
}

#[cfg(test)]
#[path = "rabin_karp_tests.rs"]
mod tests;
