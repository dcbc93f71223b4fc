// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use anyhow::Context;

use spamscan::cli::{Cli, OutputFormat, ScanArgs};
use spamscan::color;
use spamscan::config;
use spamscan::engine::{self, RunRequest};
use spamscan::error::ExitCode;
use spamscan::output::json::JsonFormatter;
use spamscan::output::text::TextFormatter;
use spamscan::output::{FormatOptions, is_spam};
use spamscan::replay::Replay;

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    if args.compact && args.output != OutputFormat::Json {
        eprintln!("--compact only works with -o json");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = config::load_effective(cli.config.as_deref(), &cwd)?;
    let text = args.input.read()?;

    tracing::trace!("scan command starting");

    let algorithm = args.algorithm.unwrap_or(config.scan.algorithm);
    let policy = args.policy.apply(config.policy());
    let request = RunRequest::new(&text, &config.patterns, algorithm).with_policy(policy);
    let result = engine::run(&request);

    let options = FormatOptions {
        steps: args.trace,
        tables: args.tables,
        compact: args.compact,
        threshold: config.scan.threshold,
    };

    match args.output {
        OutputFormat::Text => {
            let mut formatter =
                TextFormatter::stdout(color::resolve(args.color, args.no_color), options);
            if args.trace {
                let mut replay = Replay::new();
                replay.load(result.clone());
                formatter
                    .write_trace(&mut replay)
                    .context("failed to write step trace")?;
            }
            formatter
                .write_scan(&result)
                .context("failed to write scan result")?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock(), options)
                .write_scan(&result)
                .context("failed to write scan result")?;
        }
    }

    if is_spam(result.score, config.scan.threshold) {
        Ok(ExitCode::SpamDetected)
    } else {
        Ok(ExitCode::Success)
    }
}
