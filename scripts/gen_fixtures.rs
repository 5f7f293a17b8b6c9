//! Regenerates the reference fixtures under tests/fixtures.
//!
//! Usage: cargo run --bin gen-fixtures -- [DIR]
//!
//! Output is byte-stable (`index<TAB>value` lines, trailing newline) so a
//! regenerated tree can be diffed against the committed one.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use fibbench::report::digit_count;
use fibbench::sequence::fib_iter;

/// Indices pinned with their full decimal value
fn table_indices() -> impl Iterator<Item = u64> {
    (0..=20).chain([30, 50, 90, 93, 100])
}

/// Indices pinned by digit count only; the values run to thousands of digits
const DIGIT_INDICES: &[u64] = &[1000, 10000, 99999];

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures"));

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut table = String::new();
    for n in table_indices() {
        table.push_str(&format!("{}\t{}\n", n, fib_iter(n)));
    }
    let table_path = dir.join("fib_table.tsv");
    fs::write(&table_path, table)
        .with_context(|| format!("Failed to write {}", table_path.display()))?;

    let mut digits = String::new();
    for &n in DIGIT_INDICES {
        digits.push_str(&format!("{}\t{}\n", n, digit_count(&fib_iter(n))));
    }
    let digits_path = dir.join("digit_counts.tsv");
    fs::write(&digits_path, digits)
        .with_context(|| format!("Failed to write {}", digits_path.display()))?;

    println!("[OK] Fixtures written to {}", dir.display());
    Ok(())
}
