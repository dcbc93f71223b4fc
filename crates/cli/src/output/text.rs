//! Text output formatter.
//!
//! ```text
//! <algorithm>: score <score>, <n> comparisons, <n> matches
//!   <pattern> at <position>
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{FormatOptions, is_spam};
use crate::color::scheme;
use crate::engine::{AuxiliaryTables, RunResult, Step, StepDetail};
use crate::pattern::PatternSet;
use crate::replay::Replay;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Summary, matches, optional tables, and the threshold verdict.
    pub fn write_scan(&mut self, result: &RunResult) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "{}", result.algorithm)?;
        self.out.reset()?;
        writeln!(
            self.out,
            ": score {:.2}, {} comparison{}, {} match{}",
            result.score,
            result.comparisons,
            plural(result.comparisons, "", "s"),
            result.matches.len(),
            plural(result.matches.len(), "", "es"),
        )?;

        for record in &result.matches {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::pattern())?;
            write!(self.out, "{}", record.pattern)?;
            self.out.reset()?;
            write!(self.out, " at ")?;
            self.out.set_color(&scheme::position())?;
            write!(self.out, "{}", record.position)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        if self.options.tables {
            self.write_tables(&result.auxiliary)?;
        }
        self.write_verdict(result.score)
    }

    /// Play a replay to the end, one line per step.
    pub fn write_trace(&mut self, replay: &mut Replay) -> std::io::Result<()> {
        while let Some(step) = replay.advance() {
            let step = step.clone();
            let index = replay.cursor();
            self.write_step(index, &step)?;
        }
        Ok(())
    }

    fn write_step(&mut self, index: usize, step: &Step) -> std::io::Result<()> {
        write!(self.out, "{:>6}  ", index)?;
        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", step.pattern)?;
        self.out.reset()?;
        write!(
            self.out,
            " text[{}] pattern[{}]",
            step.text_position(),
            step.pattern_index
        )?;
        match step.detail {
            Some(StepDetail::Characters {
                text_char,
                pattern_char,
            }) => write!(self.out, " {:?} vs {:?}", text_char, pattern_char)?,
            Some(StepDetail::Hashes {
                pattern_hash,
                window_hash,
            }) => write!(self.out, " hash {} vs {}", window_hash, pattern_hash)?,
            None => {}
        }
        write!(self.out, " ")?;
        if step.matched {
            self.out.set_color(&scheme::hit())?;
            write!(self.out, "match")?;
        } else {
            self.out.set_color(&scheme::miss())?;
            write!(self.out, "miss")?;
        }
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_tables(&mut self, auxiliary: &AuxiliaryTables) -> std::io::Result<()> {
        match auxiliary {
            AuxiliaryTables::None => {}
            AuxiliaryTables::ShiftTables(tables) => {
                self.write_label("shift tables")?;
                for entry in tables {
                    let shifts: Vec<String> = entry
                        .table
                        .iter()
                        .map(|(c, shift)| format!("{:?}={}", c, shift))
                        .collect();
                    writeln!(self.out, "  {}: {}", entry.pattern, shifts.join(" "))?;
                }
            }
            AuxiliaryTables::PrefixTables(tables) => {
                self.write_label("prefix tables")?;
                for entry in tables {
                    writeln!(
                        self.out,
                        "  {}: {:?}",
                        entry.pattern,
                        entry.table.as_slice()
                    )?;
                }
            }
            AuxiliaryTables::RollingHashes(entries) => {
                self.write_label("rolling hashes")?;
                for entry in entries {
                    writeln!(
                        self.out,
                        "  {} @{} {:?} {}",
                        entry.pattern, entry.position, entry.window_text, entry.window_hash
                    )?;
                }
            }
        }
        Ok(())
    }

    fn write_verdict(&mut self, score: f64) -> std::io::Result<()> {
        let Some(threshold) = self.options.threshold else {
            return Ok(());
        };
        if is_spam(score, Some(threshold)) {
            self.out.set_color(&scheme::spam())?;
            write!(self.out, "spam")?;
            self.out.reset()?;
            writeln!(self.out, " (score {:.2} >= {:.2})", score, threshold)
        } else {
            self.out.set_color(&scheme::clean())?;
            write!(self.out, "clean")?;
            self.out.reset()?;
            writeln!(self.out, " (score {:.2} < {:.2})", score, threshold)
        }
    }

    /// One row per algorithm, then the cheapest run.
    pub fn write_compare(&mut self, results: &[RunResult]) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        writeln!(
            self.out,
            "{:<12}{:>8}{:>13}{:>9}",
            "algorithm", "score", "comparisons", "matches"
        )?;
        self.out.reset()?;
        for result in results {
            writeln!(
                self.out,
                "{:<12}{:>8.2}{:>13}{:>9}",
                result.algorithm.name(),
                result.score,
                result.comparisons,
                result.matches.len()
            )?;
        }
        if let Some(cheapest) = results.iter().min_by_key(|r| r.comparisons) {
            writeln!(self.out, "fewest comparisons: {}", cheapest.algorithm)?;
        }
        Ok(())
    }

    pub fn write_patterns(&mut self, patterns: &PatternSet) -> std::io::Result<()> {
        for pattern in patterns {
            write!(self.out, "{:>6.2}  ", pattern.weight())?;
            self.out.set_color(&scheme::pattern())?;
            write!(self.out, "{}", pattern.text())?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn write_label(&mut self, label: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "{}:", label)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
