// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Patterns command implementation.

use anyhow::Context;

use spamscan::cli::{Cli, OutputFormat, PatternsArgs};
use spamscan::color::resolve_color;
use spamscan::config;
use spamscan::error::ExitCode;
use spamscan::output::FormatOptions;
use spamscan::output::json::JsonFormatter;
use spamscan::output::text::TextFormatter;

/// Run the patterns command.
pub fn run(cli: &Cli, args: &PatternsArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = config::load_effective(cli.config.as_deref(), &cwd)?;

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(resolve_color(), FormatOptions::default())
                .write_patterns(&config.patterns)
                .context("failed to write pattern list")?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock(), FormatOptions::default())
                .write_patterns(&config.patterns)
                .context("failed to write pattern list")?;
        }
    }
    Ok(ExitCode::Success)
}
