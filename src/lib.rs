//! fibbench - arbitrary-precision Fibonacci micro-benchmark
//!
//! Computes large Fibonacci terms by forward iteration over `BigUint` and
//! prints them exactly, for cross-language comparison of big-integer
//! workloads. The reference workload is F(99999), a 20899-digit number.
//!
//! # Example
//!
//! ```
//! use fibbench::{run, RunOptions};
//!
//! let opts = RunOptions {
//!     index: 10,
//!     ..RunOptions::default()
//! };
//! run(&opts).unwrap();
//! ```

#![doc(html_root_url = "https://docs.rs/fibbench")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod report;
pub mod sequence;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

use std::time::Instant;
use tracing::debug;

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "fibbench";

/// Options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Term index to compute; negative values are rejected by the generator
    pub index: i64,
    /// Emit a single JSON stats object instead of the two-line output
    pub json: bool,
    /// Optional ceiling on the rendered decimal length (conversion only)
    pub max_str_digits: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            index: 99999,
            json: false,
            max_str_digits: None,
        }
    }
}

/// Compute one Fibonacci term and print it.
///
/// The plain form writes exactly two lines to stdout: the label echoing
/// the index, then the full decimal value. With `json` set it writes one
/// [`report::RunStats`] object instead.
pub fn run(opts: &RunOptions) -> Result<()> {
    debug!("computing term {}", opts.index);
    let started = Instant::now();
    let value = sequence::nth(opts.index)?;
    let elapsed = started.elapsed();
    debug!("term {} computed in {:?}", opts.index, elapsed);

    let text = report::to_decimal(&value, opts.max_str_digits)?;
    let index = opts.index as u64;

    if opts.json {
        let stats = report::RunStats {
            index,
            digits: text.len(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            value: text,
        };
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        println!("{}", report::label(index));
        println!("{}", text);
    }

    Ok(())
}
