// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compare command implementation.

use anyhow::Context;

use spamscan::cli::{Cli, CompareArgs, OutputFormat};
use spamscan::color;
use spamscan::config;
use spamscan::engine::Algorithm;
use spamscan::error::ExitCode;
use spamscan::output::json::JsonFormatter;
use spamscan::output::text::TextFormatter;
use spamscan::output::{FormatOptions, is_spam};
use spamscan::runner;

/// Run the compare command.
pub fn run(cli: &Cli, args: &CompareArgs) -> anyhow::Result<ExitCode> {
    if args.compact && args.output != OutputFormat::Json {
        eprintln!("--compact only works with -o json");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = config::load_effective(cli.config.as_deref(), &cwd)?;
    let text = args.input.read()?;

    tracing::trace!("compare command starting");

    let policy = args.policy.apply(config.policy());
    let results = runner::run_all(&text, &config.patterns, policy, &Algorithm::ALL);
    if !runner::agree(&results) {
        return Err(spamscan::Error::Internal("algorithms disagree on matches".to_string()).into());
    }

    let options = FormatOptions {
        compact: args.compact,
        threshold: config.scan.threshold,
        ..FormatOptions::default()
    };

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(color::resolve(args.color, args.no_color), options)
                .write_compare(&results)
                .context("failed to write comparison")?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock(), options).write_compare(&results)
                .context("failed to write comparison")?;
        }
    }

    let spam = results
        .iter()
        .any(|r| is_spam(r.score, config.scan.threshold));
    Ok(if spam {
        ExitCode::SpamDetected
    } else {
        ExitCode::Success
    })
}
