// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern definitions and the ordered pattern set.

use std::sync::Arc;

use serde::Serialize;

/// Built-in keyword set, in scan order.
pub const DEFAULT_PATTERNS: &[(&str, f64)] = &[
    ("free", 2.0),
    ("win", 1.5),
    ("offer", 1.5),
    ("click here", 2.5),
    ("credit card required", 2.4),
    ("risk", 1.2),
    ("risk-free", 1.9),
    ("no risk", 1.8),
    ("work from home", 2.7),
    ("luxury watches", 2.0),
    ("winner", 1.7),
    // Repetitive keywords where the KMP prefix table pays off.
    ("freefreefree", 2.6),
    ("clickclickclick here", 2.8),
    ("double your income", 2.5),
];

/// A weighted keyword.
///
/// The text is shared so that every recorded step can reference it without
/// copying.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    text: Arc<str>,
    weight: f64,
}

/// Error building a pattern.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern text must not be empty")]
    Empty,

    #[error("invalid weight {weight} for pattern `{pattern}` (must be positive and finite)")]
    InvalidWeight { pattern: String, weight: f64 },
}

impl Pattern {
    /// Create a pattern, rejecting empty text and non-positive weights.
    pub fn new(text: &str, weight: f64) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(PatternError::InvalidWeight {
                pattern: text.to_string(),
                weight,
            });
        }
        Ok(Self {
            text: Arc::from(text),
            weight,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the pattern text.
    pub fn shared_text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Length in characters (the unit every matcher indexes by).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Ordered, read-only list of patterns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Build a set from `(text, weight)` pairs, failing on the first invalid pair.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Result<Self, PatternError> {
        let patterns = pairs
            .iter()
            .map(|(text, weight)| Pattern::new(text, *weight))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .map(|(text, weight)| Pattern {
                text: Arc::from(*text),
                weight: *weight,
            })
            .collect();
        Self { patterns }
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
