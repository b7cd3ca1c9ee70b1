//! Custom cargo commands for the gimatria crate.
//!
//! Usage:
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short while

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &[
    "decode_totality",
    "canonical_round_trip",
    "latin_hebrew_bytes",
];

/// Seconds per fuzz target unless `FUZZ_SECONDS` says otherwise.
const DEFAULT_FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test      Run all Rust tests (default features, then none)
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for FUZZ_SECONDS (default 60), needs cargo-fuzz
"#
    );
}

/// Run all tests, with and without the default features
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target on nightly
fn fuzz() -> Result<()> {
    let seconds = match env::var("FUZZ_SECONDS") {
        Ok(value) => value
            .parse::<u32>()
            .with_context(|| format!("FUZZ_SECONDS is not a number: {:?}", value))?,
        Err(_) => DEFAULT_FUZZ_SECONDS,
    };
    let max_time = format!("-max_total_time={}", seconds);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }

    println!("\n✓ No crashes in {} fuzz targets", FUZZ_TARGETS.len());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("cannot determine current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
