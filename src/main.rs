// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gimatria::legacy::from_latin_hebrew;
use gimatria::utils::tokens;
use gimatria::{normalize_token, Gimatria, SweepReport};

mod cli;
use cli::display;
use cli::{Cli, Commands, InputEncoding};

/// One line of `check --json` output.
#[derive(Serialize)]
struct CheckedWord<'a> {
    word: &'a str,
    canonical: bool,
    value: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);
    let codec = Gimatria::with_trace(cli.trace);

    match run(cli.command, &codec) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            display::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Trace events go to stderr so they never mix with results on stdout.
/// `RUST_LOG` overrides the default filter.
fn init_tracing(trace: bool) {
    let default = if trace { "gimatria=debug" } else { "gimatria=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// Returns `Ok(false)` when the command ran but found a problem.
fn run(command: Commands, codec: &Gimatria) -> Result<bool> {
    match command {
        Commands::Encode { numbers } => {
            let mut out = io::stdout().lock();
            for n in numbers {
                writeln!(out, "{}\t{}", n, display::numeral(&codec.encode(n)))?;
            }
            Ok(true)
        }
        Commands::Decode { numerals } => {
            let mut out = io::stdout().lock();
            for numeral in &numerals {
                writeln!(out, "{}\t{}", numeral, codec.decode(numeral))?;
            }
            Ok(true)
        }
        Commands::Check {
            words,
            all,
            json,
            strip_marks,
            encoding,
        } => {
            let text;
            let candidates: Vec<&str> = if words.is_empty() {
                text = read_stdin(encoding)?;
                tokens(&text).collect()
            } else {
                words.iter().map(String::as_str).collect()
            };
            check_words(codec, &candidates, all, json, strip_marks)?;
            Ok(true)
        }
        Commands::Verify { max, json } => {
            if max < 1 {
                bail!("--max must be at least 1, got {}", max);
            }
            let report = run_sweep(codec, max);
            if json {
                print_json(&report)?;
            } else {
                print_sweep_report(max, &report);
            }
            Ok(report.is_clean())
        }
    }
}

fn read_stdin(encoding: InputEncoding) -> Result<String> {
    let mut raw = Vec::new();
    io::stdin()
        .read_to_end(&mut raw)
        .context("failed to read stdin")?;
    match encoding {
        InputEncoding::Utf8 => String::from_utf8(raw)
            .context("stdin is not valid UTF-8 (try --encoding iso-8859-8)"),
        InputEncoding::Iso88598 => Ok(from_latin_hebrew(&raw)),
    }
}

fn check_words(
    codec: &Gimatria,
    words: &[&str],
    all: bool,
    json: bool,
    strip_marks: bool,
) -> Result<()> {
    let mut out = io::stdout().lock();
    for &word in words {
        let normalized;
        let candidate = if strip_marks {
            normalized = normalize_token(word);
            normalized.as_str()
        } else {
            word
        };
        let value = codec.is_canonical(candidate);
        let canonical = value > 0;

        if json {
            let line = to_json(&CheckedWord {
                word,
                canonical,
                value,
            })?;
            writeln!(out, "{}", line)?;
        } else if canonical || all {
            let shown = if canonical { value.to_string() } else { String::new() };
            writeln!(out, "{} {}\t{}", display::status_mark(canonical), word, shown)?;
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_sweep(codec: &Gimatria, max: i64) -> SweepReport {
    use indicatif::{ProgressBar, ProgressStyle};

    let progress = ProgressBar::new(max as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
    {
        progress.set_style(style.progress_chars("━━╸"));
    }
    progress.set_prefix("Verifying");
    gimatria::verify::sweep_with_progress(codec, max, &progress)
}

#[cfg(not(feature = "parallel"))]
fn run_sweep(codec: &Gimatria, max: i64) -> SweepReport {
    gimatria::sweep(codec, max)
}

fn print_sweep_report(max: i64, report: &SweepReport) {
    display::section_top(&format!("ROUND TRIP 1..={}", max));
    display::row(&format!(" checked          {}", display::count(report.checked, 12)));
    display::row(&format!(" fixed points     {}", display::count(report.fixed_points, 12)));
    display::row(&format!(" exact thousands  {}", display::count(report.exact_thousands, 12)));
    display::row(&format!(" failures         {}", display::count(report.failure_count, 12)));
    for failure in &report.failures {
        display::row(&format!(
            " {} {} → {} decodes to {}, validates as {}",
            display::status_mark(false),
            failure.value,
            display::numeral(&failure.numeral),
            failure.decoded,
            failure.canonical
        ));
    }
    display::section_bot();
}

#[cfg(feature = "serde_json")]
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("failed to serialize output")
}

#[cfg(not(feature = "serde_json"))]
fn to_json<T: Serialize>(_value: &T) -> Result<String> {
    bail!("JSON output requires the `serde_json` feature")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let line = to_json(value)?;
    writeln!(io::stdout().lock(), "{}", line)?;
    Ok(())
}
