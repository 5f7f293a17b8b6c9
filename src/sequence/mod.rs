//! Fibonacci sequence generation
//!
//! Forward iteration over arbitrary-precision integers, under the
//! convention F(0) = 0, F(1) = 1, F(k) = F(k-1) + F(k-2).

pub use errors::{FibError, FibResult};

mod errors;

#[cfg(test)]
mod tests;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Compute the n-th Fibonacci term by forward iteration.
///
/// Loop invariant: at the start of step i, `current` holds F(i) and
/// `next` holds F(i+1). Addition is exact at every magnitude; the only
/// bound on `n` is the machine-integer loop counter.
///
/// # Example
///
/// ```
/// use fibbench::sequence::fib_iter;
///
/// assert_eq!(fib_iter(10).to_string(), "55");
/// ```
pub fn fib_iter(n: u64) -> BigUint {
    let mut current: BigUint = Zero::zero();
    let mut next: BigUint = One::one();

    for _ in 0..n {
        let new = &next + &current;
        current = next;
        next = new;
    }

    current
}

/// Checked entry point: rejects negative indices.
///
/// The pure loop takes `u64`, so a negative index can only arrive through
/// a signed outer surface (CLI flag, config value). It fails fast here
/// instead of wrapping into an absurd loop count.
pub fn nth(index: i64) -> FibResult<BigUint> {
    if index < 0 {
        return Err(FibError::InvalidArgument(index));
    }
    Ok(fib_iter(index as u64))
}
