//! Custom cargo commands for the verdict crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (tests + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Minimum number of `INVARIANT:` comments expected under src/.
const MIN_INVARIANT_MARKERS: usize = 4;

/// Comparison fragments both engine copies must contain after normalizing
/// the width-specific names.
const ENGINE_FRAGMENTS: &[&str] = &[
    "abs(a) + abs(b) < MIN_NORMAL",
    "abs(a - b) < epsilon * MIN_NORMAL",
    "abs(a - b) / sum.min(f32::MAX) < epsilon",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + proof crate)
  test      Run all Rust tests, every feature enabled
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Verdict Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet", "--all-features"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Checking the proof crate's engine copy...");
    verify_engine_copy()?;
    println!("✓ Engine copies aligned\n");

    println!("[5/5] Testing the proof crate...");
    run_cargo(&["test", "--quiet", "--manifest-path", "kani-proofs/Cargo.toml"])?;
    println!("✓ Proof crate tests passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nRun `cargo kani` in kani-proofs/ for the model checking proofs.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--all-features"])
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
    run_cargo(&["bench", "--bench", "approx_bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(())
}

/// The proof crate proves a copy of the f32 engine; fail if the copy drifts.
fn verify_engine_copy() -> Result<()> {
    let root = project_root()?;

    let engine = fs::read_to_string(root.join("src/approx.rs"))
        .context("Failed to read src/approx.rs")?;
    let proofs = fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    let engine = normalize_engine(&engine);
    for fragment in ENGINE_FRAGMENTS {
        if !engine.contains(fragment) {
            bail!("src/approx.rs no longer contains `{}`", fragment);
        }
        if !proofs.contains(fragment) {
            bail!("kani-proofs/src/lib.rs no longer contains `{}`", fragment);
        }
    }

    Ok(())
}

/// Map the main crate's width-suffixed names onto the proof crate's.
fn normalize_engine(source: &str) -> String {
    source
        .replace("abs_f32(", "abs(")
        .replace("F32_MIN_NORMAL", "MIN_NORMAL")
}
