// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::{Algorithm, ScanPolicy};
use crate::error::{Error, Result};

/// Score text for spam keywords with instrumented substring-search algorithms
#[derive(Parser)]
#[command(name = "spamscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SPAMSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan text with one algorithm
    Scan(ScanArgs),
    /// Scan text with every algorithm and compare their cost
    Compare(CompareArgs),
    /// List the effective pattern set
    Patterns(PatternsArgs),
}

/// Where the text to scan comes from.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Text to scan (reads stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the input text.
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            });
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::Io {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        Ok(buf)
    }
}

/// Policy overrides shared by `scan` and `compare`.
#[derive(clap::Args)]
pub struct PolicyArgs {
    /// Report every occurrence instead of stopping at the first per pattern
    #[arg(long)]
    pub all_matches: bool,

    /// Only scan patterns the text contains
    #[arg(long)]
    pub prefilter: bool,
}

impl PolicyArgs {
    /// Apply the flags on top of the configured policy.
    pub fn apply(&self, base: ScanPolicy) -> ScanPolicy {
        ScanPolicy {
            stop_on_first_match: base.stop_on_first_match && !self.all_matches,
            use_all_patterns: base.use_all_patterns && !self.prefilter,
        }
    }
}

#[derive(clap::Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Search algorithm (default: from config, else naive)
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<Algorithm>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Print every comparison step
    #[arg(long)]
    pub trace: bool,

    /// Print the algorithm's auxiliary tables
    #[arg(long)]
    pub tables: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct PatternsArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
