// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Step-by-step replay of a completed run.
//!
//! The cursor never re-runs the engine: it walks the steps of a loaded
//! [`RunResult`] and can be paused, resumed, and reset at any point.

use crate::engine::{RunResult, Step};

/// Where a replay currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Nothing loaded.
    Idle,
    Playing,
    Paused,
    /// Every step has been shown.
    Finished,
}

/// Cursor over the steps of one run.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    result: Option<RunResult>,
    cursor: usize,
    paused: bool,
}

impl Replay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was loaded and start playing from the first step.
    pub fn load(&mut self, result: RunResult) {
        tracing::debug!(
            "replaying {} steps of {}",
            result.steps.len(),
            result.algorithm
        );
        self.result = Some(result);
        self.cursor = 0;
        self.paused = false;
    }

    /// Back to a clean state: no result, no steps, cursor at zero.
    pub fn reset(&mut self) {
        self.result = None;
        self.cursor = 0;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        if self.result.is_some() {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Show the next step.
    ///
    /// Returns `None` when paused, finished, or idle; the cursor does not move.
    pub fn advance(&mut self) -> Option<&Step> {
        if self.paused {
            return None;
        }
        let result = self.result.as_ref()?;
        let step = result.steps.get(self.cursor)?;
        self.cursor += 1;
        Some(step)
    }

    /// The most recently shown step.
    pub fn current(&self) -> Option<&Step> {
        let index = self.cursor.checked_sub(1)?;
        self.steps().get(index)
    }

    /// Number of steps shown so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn steps(&self) -> &[Step] {
        self.result.as_ref().map_or(&[], |r| r.steps.as_slice())
    }

    pub fn result(&self) -> Option<&RunResult> {
        self.result.as_ref()
    }

    pub fn state(&self) -> ReplayState {
        match &self.result {
            None => ReplayState::Idle,
            Some(result) if self.cursor >= result.steps.len() => ReplayState::Finished,
            Some(_) if self.paused => ReplayState::Paused,
            Some(_) => ReplayState::Playing,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state() == ReplayState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.state() == ReplayState::Finished
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
