//! Run output: label line, exact decimal rendering, digit counts
//!
//! Everything on stdout goes through this module so the two-line contract
//! of a plain run stays in one place: the label echoing the index, then
//! the full decimal value.

use num_bigint::BigUint;
use serde::Serialize;

use crate::sequence::{FibError, FibResult};

/// The label line printed before the value
#[inline]
pub fn label(index: u64) -> String {
    format!("fib_iter( {} ) => ", index)
}

/// Exact decimal digit count of a term (1 for zero)
pub fn digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// Render a term as exact decimal text.
///
/// `max_digits` is an optional ceiling on the rendered length, mirroring
/// environments that cap int-to-text conversion. It guards conversion
/// output only; the computation that produced `value` is never limited.
/// `None` means unlimited, which is the default everywhere in this crate.
pub fn to_decimal(
    value: &BigUint,
    max_digits: Option<usize>,
) -> FibResult<String> {
    let text = value.to_str_radix(10);
    if let Some(limit) = max_digits {
        if text.len() > limit {
            return Err(FibError::ConversionLimitExceeded {
                digits: text.len(),
                limit,
            });
        }
    }
    Ok(text)
}

/// Machine-readable summary of a single run
#[derive(Debug, Serialize)]
pub struct RunStats {
    /// Index of the computed term
    pub index: u64,
    /// Decimal digit count of the term
    pub digits: usize,
    /// Wall-clock computation time in milliseconds
    pub elapsed_ms: f64,
    /// Exact decimal value
    pub value: String,
}
